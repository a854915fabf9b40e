// Queue Handle and Attributes

use nix::errno::Errno;
use nix::mqueue::{
    mq_close, mq_getattr, mq_open, mq_receive, mq_send, mq_unlink, MQ_OFlag, MqAttr, MqdT,
};
use nix::sys::stat::Mode;
use tracing::{debug, warn};

use crate::error::{CloseError, OpenError, ReceiveError, SendError, UnlinkError};

/// Queue capacity, fixed when the queue is created and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueAttributes {
    /// Largest message the queue accepts, in bytes
    pub max_message_size: usize,
    /// Messages the queue holds before senders block
    pub max_queue_depth: usize,
}

impl Default for QueueAttributes {
    fn default() -> Self {
        Self {
            max_message_size: 4096,
            max_queue_depth: 10,
        }
    }
}

/// An open POSIX message queue.
///
/// The handle owns the OS queue descriptor from open until [`close`] or
/// drop. Dropping without closing releases the descriptor too, logging a
/// warning if the OS rejects the close. Send and receive block until space
/// or data is available.
///
/// Queue names follow the OS convention, e.g. `/events`. The name persists
/// in the system namespace across process exits until [`unlink`] removes it.
///
/// [`close`]: MessageQueue::close
pub struct MessageQueue {
    name: String,
    // Taken by close() and Drop; absent only during teardown.
    mqd: Option<MqdT>,
    attributes: QueueAttributes,
}

impl MessageQueue {
    /// Create the named queue, or open it read-write if it already exists.
    ///
    /// When the queue already exists the OS ignores the requested capacity;
    /// [`attributes`] reports the negotiated values either way.
    ///
    /// # Arguments
    ///
    /// * `name` - Queue name, e.g. `/events`
    /// * `attributes` - Requested capacity for a fresh queue
    ///
    /// [`attributes`]: MessageQueue::attributes
    pub fn create(
        name: impl Into<String>,
        attributes: QueueAttributes,
    ) -> Result<Self, OpenError> {
        let name = name.into();
        let attr = MqAttr::new(
            0,
            attributes.max_queue_depth as i64,
            attributes.max_message_size as i64,
            0,
        );
        // Creation mode 0644: owner read/write, group and others read.
        let mqd = mq_open(
            name.as_str(),
            MQ_OFlag::O_CREAT | MQ_OFlag::O_RDWR,
            Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH,
            Some(&attr),
        )?;
        Self::from_descriptor(name, mqd)
    }

    /// Open an existing queue read-write.
    ///
    /// Fails with [`OpenError::NotFound`] when the name is not in the
    /// system namespace. The queue's capacity is available through
    /// [`attributes`] afterwards.
    ///
    /// [`attributes`]: MessageQueue::attributes
    pub fn open(name: impl Into<String>) -> Result<Self, OpenError> {
        let name = name.into();
        let mqd = mq_open(name.as_str(), MQ_OFlag::O_RDWR, Mode::empty(), None)?;
        Self::from_descriptor(name, mqd)
    }

    /// Read the negotiated attributes and assemble the handle.
    fn from_descriptor(name: String, mqd: MqdT) -> Result<Self, OpenError> {
        let attr = match mq_getattr(&mqd) {
            Ok(attr) => attr,
            Err(e) => {
                // The descriptor must not leak when readback fails.
                if let Err(close_err) = mq_close(mqd) {
                    warn!(queue = %name, error = %close_err, "failed to close queue after attribute readback error");
                }
                return Err(OpenError::from(e));
            }
        };
        debug!(queue = %name, "opened message queue");
        Ok(Self {
            name,
            mqd: Some(mqd),
            attributes: QueueAttributes {
                max_message_size: attr.msgsize() as usize,
                max_queue_depth: attr.maxmsg() as usize,
            },
        })
    }

    /// Queue name as passed to open/create
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity negotiated with the OS when the queue was opened
    pub fn attributes(&self) -> &QueueAttributes {
        &self.attributes
    }

    fn descriptor(&self) -> Result<&MqdT, Errno> {
        self.mqd.as_ref().ok_or(Errno::EBADF)
    }

    /// Enqueue one message at the given priority.
    ///
    /// Blocks while the queue is full. Higher priorities are dequeued
    /// first; the OS bounds the accepted range (`MQ_PRIO_MAX`).
    pub fn send(&self, message: &[u8], priority: u32) -> Result<(), SendError> {
        let mqd = self.descriptor().map_err(SendError::from)?;
        mq_send(mqd, message, priority)?;
        debug!(queue = %self.name, bytes = message.len(), priority, "sent message");
        Ok(())
    }

    /// Dequeue the highest-priority, oldest-enqueued message.
    ///
    /// Blocks while the queue is empty. The buffer must be at least the
    /// queue's maximum message size; a smaller buffer fails with
    /// [`ReceiveError::BufferTooSmall`] and leaves the message enqueued.
    ///
    /// Returns the number of bytes written into `buffer` and the message's
    /// priority.
    pub fn receive(&self, buffer: &mut [u8]) -> Result<(usize, u32), ReceiveError> {
        let mqd = self.descriptor().map_err(ReceiveError::from)?;
        let mut priority = 0u32;
        let received = mq_receive(mqd, buffer, &mut priority)?;
        debug!(queue = %self.name, bytes = received, priority, "received message");
        Ok((received, priority))
    }

    /// Release the descriptor, surfacing the OS result.
    ///
    /// Consuming `self` makes use-after-close and double close
    /// unrepresentable; dropping the handle closes it as well, but without
    /// a way to observe a failure.
    pub fn close(mut self) -> Result<(), CloseError> {
        match self.mqd.take() {
            Some(mqd) => {
                mq_close(mqd)?;
                debug!(queue = %self.name, "closed message queue");
                Ok(())
            }
            None => Err(CloseError::BadDescriptor {
                errno: Errno::EBADF as i32,
            }),
        }
    }
}

impl Drop for MessageQueue {
    fn drop(&mut self) {
        if let Some(mqd) = self.mqd.take() {
            if let Err(e) = mq_close(mqd) {
                warn!(queue = %self.name, error = %e, "failed to close message queue");
            }
        }
    }
}

impl std::fmt::Debug for MessageQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageQueue")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .finish()
    }
}

/// Remove a queue name from the system namespace.
///
/// Descriptors already open stay usable until closed; the queue itself is
/// destroyed once the last one goes away. Fails with
/// [`UnlinkError::NotFound`] when the name does not exist.
pub fn unlink(name: &str) -> Result<(), UnlinkError> {
    mq_unlink(name)?;
    debug!(queue = %name, "unlinked message queue");
    Ok(())
}
