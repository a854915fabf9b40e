//! Roundtrip Example
//!
//! Creates a queue, sends two messages at different priorities, receives
//! them back, and removes the queue.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package posixmq-client --example roundtrip
//! ```

use posixmq_client::{unlink, MessageQueue, QueueAttributes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = format!("/posixmq-roundtrip-{}", std::process::id());

    // 1. Create the queue
    println!("1. Creating queue {name}...");
    let queue = MessageQueue::create(&name, QueueAttributes::default())?;
    println!(
        "   max message size: {}, max depth: {}\n",
        queue.attributes().max_message_size,
        queue.attributes().max_queue_depth
    );

    // 2. Send at two priorities
    println!("2. Sending messages...");
    queue.send(b"low priority", 1)?;
    queue.send(b"high priority", 9)?;
    println!("   sent 2 messages\n");

    // 3. Receive both - the higher priority comes back first
    println!("3. Receiving...");
    let mut buf = vec![0u8; queue.attributes().max_message_size];
    for _ in 0..2 {
        let (len, priority) = queue.receive(&mut buf)?;
        println!(
            "   priority {}: {}",
            priority,
            String::from_utf8_lossy(&buf[..len])
        );
    }

    // 4. Tear down
    queue.close()?;
    unlink(&name)?;
    println!("\n4. Queue removed");

    Ok(())
}
