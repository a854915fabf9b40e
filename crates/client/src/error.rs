//! Per-Operation Error Types
//!
//! Each queue operation gets its own tagged enum wrapping the errno the OS
//! reported. Nothing is reclassified into transient/permanent here; callers
//! that care about a specific condition match the variant or read `errno()`.

use nix::errno::Errno;
use thiserror::Error;

/// Error opening or creating a queue
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    #[error("queue does not exist (errno {errno})")]
    NotFound { errno: i32 },

    #[error("permission denied (errno {errno})")]
    PermissionDenied { errno: i32 },

    #[error("invalid queue name or attributes (errno {errno})")]
    InvalidArgument { errno: i32 },

    #[error("queue name too long (errno {errno})")]
    NameTooLong { errno: i32 },

    #[error("descriptor or queue limit reached (errno {errno})")]
    LimitReached { errno: i32 },

    #[error("open failed (errno {errno})")]
    Os { errno: i32 },
}

impl OpenError {
    /// Raw OS error code
    pub fn errno(&self) -> i32 {
        match *self {
            OpenError::NotFound { errno }
            | OpenError::PermissionDenied { errno }
            | OpenError::InvalidArgument { errno }
            | OpenError::NameTooLong { errno }
            | OpenError::LimitReached { errno }
            | OpenError::Os { errno } => errno,
        }
    }
}

impl From<Errno> for OpenError {
    fn from(e: Errno) -> Self {
        let errno = e as i32;
        match e {
            Errno::ENOENT => OpenError::NotFound { errno },
            Errno::EACCES => OpenError::PermissionDenied { errno },
            Errno::EINVAL => OpenError::InvalidArgument { errno },
            Errno::ENAMETOOLONG => OpenError::NameTooLong { errno },
            Errno::EMFILE | Errno::ENFILE | Errno::ENOSPC | Errno::ENOMEM => {
                OpenError::LimitReached { errno }
            }
            _ => OpenError::Os { errno },
        }
    }
}

/// Error closing a queue descriptor
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CloseError {
    #[error("invalid queue descriptor (errno {errno})")]
    BadDescriptor { errno: i32 },

    #[error("close failed (errno {errno})")]
    Os { errno: i32 },
}

impl CloseError {
    /// Raw OS error code
    pub fn errno(&self) -> i32 {
        match *self {
            CloseError::BadDescriptor { errno } | CloseError::Os { errno } => errno,
        }
    }
}

impl From<Errno> for CloseError {
    fn from(e: Errno) -> Self {
        let errno = e as i32;
        match e {
            Errno::EBADF => CloseError::BadDescriptor { errno },
            _ => CloseError::Os { errno },
        }
    }
}

/// Error removing a queue name from the namespace
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnlinkError {
    #[error("queue does not exist (errno {errno})")]
    NotFound { errno: i32 },

    #[error("permission denied (errno {errno})")]
    PermissionDenied { errno: i32 },

    #[error("queue name too long (errno {errno})")]
    NameTooLong { errno: i32 },

    #[error("unlink failed (errno {errno})")]
    Os { errno: i32 },
}

impl UnlinkError {
    /// Raw OS error code
    pub fn errno(&self) -> i32 {
        match *self {
            UnlinkError::NotFound { errno }
            | UnlinkError::PermissionDenied { errno }
            | UnlinkError::NameTooLong { errno }
            | UnlinkError::Os { errno } => errno,
        }
    }
}

impl From<Errno> for UnlinkError {
    fn from(e: Errno) -> Self {
        let errno = e as i32;
        match e {
            Errno::ENOENT => UnlinkError::NotFound { errno },
            Errno::EACCES => UnlinkError::PermissionDenied { errno },
            Errno::ENAMETOOLONG => UnlinkError::NameTooLong { errno },
            _ => UnlinkError::Os { errno },
        }
    }
}

/// Error sending a message
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    #[error("message larger than the queue's maximum message size (errno {errno})")]
    MessageTooLarge { errno: i32 },

    #[error("priority outside the OS-supported range (errno {errno})")]
    InvalidPriority { errno: i32 },

    #[error("invalid queue descriptor (errno {errno})")]
    BadDescriptor { errno: i32 },

    #[error("send interrupted by a signal (errno {errno})")]
    Interrupted { errno: i32 },

    #[error("send failed (errno {errno})")]
    Os { errno: i32 },
}

impl SendError {
    /// Raw OS error code
    pub fn errno(&self) -> i32 {
        match *self {
            SendError::MessageTooLarge { errno }
            | SendError::InvalidPriority { errno }
            | SendError::BadDescriptor { errno }
            | SendError::Interrupted { errno }
            | SendError::Os { errno } => errno,
        }
    }
}

impl From<Errno> for SendError {
    fn from(e: Errno) -> Self {
        let errno = e as i32;
        match e {
            Errno::EMSGSIZE => SendError::MessageTooLarge { errno },
            Errno::EINVAL => SendError::InvalidPriority { errno },
            Errno::EBADF => SendError::BadDescriptor { errno },
            Errno::EINTR => SendError::Interrupted { errno },
            _ => SendError::Os { errno },
        }
    }
}

/// Error receiving a message
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveError {
    #[error("buffer smaller than the queue's maximum message size (errno {errno})")]
    BufferTooSmall { errno: i32 },

    #[error("invalid queue descriptor (errno {errno})")]
    BadDescriptor { errno: i32 },

    #[error("receive interrupted by a signal (errno {errno})")]
    Interrupted { errno: i32 },

    #[error("receive failed (errno {errno})")]
    Os { errno: i32 },
}

impl ReceiveError {
    /// Raw OS error code
    pub fn errno(&self) -> i32 {
        match *self {
            ReceiveError::BufferTooSmall { errno }
            | ReceiveError::BadDescriptor { errno }
            | ReceiveError::Interrupted { errno }
            | ReceiveError::Os { errno } => errno,
        }
    }
}

impl From<Errno> for ReceiveError {
    fn from(e: Errno) -> Self {
        let errno = e as i32;
        match e {
            Errno::EMSGSIZE => ReceiveError::BufferTooSmall { errno },
            Errno::EBADF => ReceiveError::BadDescriptor { errno },
            Errno::EINTR => ReceiveError::Interrupted { errno },
            _ => ReceiveError::Os { errno },
        }
    }
}
