// Queue Client Library Property Tests
//
// Exercises the library against real OS queues. Each test uses a unique
// queue name and removes it before returning.

use posixmq_client::{unlink, MessageQueue, QueueAttributes, ReceiveError, UnlinkError};

fn unique_name(label: &str) -> String {
    format!("/posixmq-test-{}-{}", std::process::id(), label)
}

const SMALL: QueueAttributes = QueueAttributes {
    max_message_size: 256,
    max_queue_depth: 4,
};

#[test]
fn test_create_then_open_returns_creation_attributes() {
    let name = unique_name("attrs");
    let created = MessageQueue::create(&name, SMALL).unwrap();

    let opened = MessageQueue::open(&name).unwrap();
    assert_eq!(*opened.attributes(), SMALL);
    assert_eq!(opened.name(), name);

    opened.close().unwrap();
    created.close().unwrap();
    unlink(&name).unwrap();
}

#[test]
fn test_send_receive_roundtrip() {
    let name = unique_name("roundtrip");
    let queue = MessageQueue::create(&name, SMALL).unwrap();

    queue.send(b"payload bytes", 7).unwrap();

    let mut buf = vec![0u8; SMALL.max_message_size];
    let (len, priority) = queue.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"payload bytes");
    assert_eq!(priority, 7);

    queue.close().unwrap();
    unlink(&name).unwrap();
}

#[test]
fn test_undersized_buffer_does_not_dequeue() {
    let name = unique_name("undersized");
    let queue = MessageQueue::create(&name, SMALL).unwrap();

    queue.send(b"kept", 2).unwrap();

    // Buffer below max_message_size is rejected by the OS
    let mut short_buf = [0u8; 16];
    let err = queue.receive(&mut short_buf).unwrap_err();
    assert!(matches!(err, ReceiveError::BufferTooSmall { .. }));
    assert!(err.errno() > 0);

    // The message is still there
    let mut buf = vec![0u8; SMALL.max_message_size];
    let (len, priority) = queue.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"kept");
    assert_eq!(priority, 2);

    queue.close().unwrap();
    unlink(&name).unwrap();
}

#[test]
fn test_unlink_missing_queue_fails_not_found() {
    let err = unlink(&unique_name("missing")).unwrap_err();
    assert!(matches!(err, UnlinkError::NotFound { .. }));
}

#[test]
fn test_higher_priority_dequeued_first() {
    let name = unique_name("priority");
    let queue = MessageQueue::create(&name, SMALL).unwrap();

    queue.send(b"low", 1).unwrap();
    queue.send(b"high", 5).unwrap();

    let mut buf = vec![0u8; SMALL.max_message_size];

    let (len, priority) = queue.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"high");
    assert_eq!(priority, 5);

    let (len, priority) = queue.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"low");
    assert_eq!(priority, 1);

    queue.close().unwrap();
    unlink(&name).unwrap();
}

#[test]
fn test_create_or_open_ignores_new_capacity() {
    let name = unique_name("recreate");
    let first = MessageQueue::create(&name, SMALL).unwrap();

    // Second create opens the existing queue; the requested capacity is
    // ignored and the negotiated attributes are the original ones.
    let second = MessageQueue::create(
        &name,
        QueueAttributes {
            max_message_size: 128,
            max_queue_depth: 2,
        },
    )
    .unwrap();
    assert_eq!(*second.attributes(), SMALL);

    second.close().unwrap();
    first.close().unwrap();
    unlink(&name).unwrap();
}

#[test]
fn test_open_missing_queue_fails() {
    let name = unique_name("absent");
    let err = MessageQueue::open(&name).unwrap_err();
    assert!(err.errno() > 0);
}

#[test]
fn test_unlinked_queue_stays_usable_until_closed() {
    let name = unique_name("unlink-open");
    let queue = MessageQueue::create(&name, SMALL).unwrap();

    unlink(&name).unwrap();

    // The name is gone but the open descriptor still works
    queue.send(b"still here", 3).unwrap();
    let mut buf = vec![0u8; SMALL.max_message_size];
    let (len, priority) = queue.receive(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"still here");
    assert_eq!(priority, 3);

    queue.close().unwrap();
    let err = MessageQueue::open(&name).unwrap_err();
    assert!(matches!(err, posixmq_client::OpenError::NotFound { .. }));
}
