//! posixmq-client - Blocking POSIX Message Queue Client
//!
//! Thin wrappers over the POSIX message queue API (`mq_open`, `mq_getattr`,
//! `mq_send`, `mq_receive`, `mq_close`, `mq_unlink`). Every operation maps
//! to a single blocking syscall; failures surface immediately with the
//! underlying OS error code attached. Nothing is retried here.
//!
//! # Example
//!
//! ```no_run
//! use posixmq_client::{MessageQueue, QueueAttributes};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create the queue (or open it if it already exists)
//!     let queue = MessageQueue::create("/events", QueueAttributes::default())?;
//!     queue.send(b"hello", 3)?;
//!
//!     // Receive blocks until a message is available
//!     let mut buf = vec![0u8; queue.attributes().max_message_size];
//!     let (len, priority) = queue.receive(&mut buf)?;
//!     println!("{} bytes at priority {}", len, priority);
//!
//!     queue.close()?;
//!     posixmq_client::unlink("/events")?;
//!     Ok(())
//! }
//! ```

mod error;
mod queue;

pub use error::{CloseError, OpenError, ReceiveError, SendError, UnlinkError};
pub use queue::{unlink, MessageQueue, QueueAttributes};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
