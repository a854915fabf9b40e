//! mqsend - Send one message to a POSIX message queue
//!
//! The queue must already exist; mqsend opens it read-write, enqueues the
//! message at the given priority, and exits silently on success. Every
//! failure prints a diagnostic to stderr and exits with status 1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use posixmq_client::MessageQueue;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mqsend")]
#[command(about = "Send one message to an existing POSIX message queue", long_about = None)]
#[command(version)]
struct Cli {
    /// Queue name (OS convention, e.g. /events)
    queue: String,

    /// Message text to enqueue (sent as raw bytes, no terminator)
    message: String,

    /// Message priority (higher values are dequeued first)
    priority: u32,
}

fn main() -> Result<()> {
    // Usage errors exit 1, like every other failure of this tool.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("Failed to write usage")?;
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    // Logging goes to stderr; stdout stays empty on success
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("mqsend=warn"))
        .context("Failed to create env filter")?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let queue = MessageQueue::open(&cli.queue)
        .with_context(|| format!("Opening queue {} failed", cli.queue))?;

    queue
        .send(cli.message.as_bytes(), cli.priority)
        .context("Message send failed")?;

    Ok(())
}
