//! Ordering and read-only access behavior for both disciplines.
//!
//! All tests drive a queue from a single thread. The queue types provide
//! no internal synchronization by contract: sharing one across execution
//! contexts (e.g. interrupt handler vs. main flow) requires the caller to
//! establish mutual exclusion around every operation.

use recq::{ByteQueue, Discipline, Queue, QueueCfg};

fn cfg(discipline: Discipline, capacity: usize, overwrite: bool) -> QueueCfg {
    QueueCfg {
        capacity,
        discipline,
        overwrite,
    }
}

#[test]
fn fifo_pops_oldest_first() {
    let mut q = Queue::<u32>::new(&cfg(Discipline::Fifo, 3, false)).unwrap();
    q.push(1);
    q.push(2);
    q.push(3);

    assert_eq!(q.pop(), Some(1));
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(3));
    assert_eq!(q.pop(), None);
}

#[test]
fn lifo_pops_newest_first() {
    let mut q = Queue::<u32>::new(&cfg(Discipline::Lifo, 3, false)).unwrap();
    q.push(1);
    q.push(2);
    q.push(3);

    assert_eq!(q.pop(), Some(3));
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(1));
    assert_eq!(q.pop(), None);
}

#[test]
fn byte_records_round_trip_byte_equal() {
    let mut q = ByteQueue::new(4, &cfg(Discipline::Fifo, 3, false)).unwrap();
    let record = [0xCA, 0xFE, 0xF0, 0x0D];
    let before = q.len();

    assert!(q.push(&record));
    let mut out = [0u8; 4];
    assert!(q.pop(&mut out));

    assert_eq!(out, record);
    assert_eq!(q.len(), before);
}

#[test]
fn byte_queue_orders_per_discipline() {
    let records: [[u8; 2]; 3] = [[1, 1], [2, 2], [3, 3]];

    let mut fifo = ByteQueue::new(2, &cfg(Discipline::Fifo, 3, false)).unwrap();
    let mut lifo = ByteQueue::new(2, &cfg(Discipline::Lifo, 3, false)).unwrap();
    for r in &records {
        assert!(fifo.push(r));
        assert!(lifo.push(r));
    }

    let mut out = [0u8; 2];
    for expected in [[1, 1], [2, 2], [3, 3]] {
        assert!(fifo.pop(&mut out));
        assert_eq!(out, expected);
    }
    for expected in [[3, 3], [2, 2], [1, 1]] {
        assert!(lifo.pop(&mut out));
        assert_eq!(out, expected);
    }
}

#[test]
fn peek_is_idempotent_fifo() {
    let mut q = Queue::<i32>::new(&cfg(Discipline::Fifo, 4, false)).unwrap();
    q.push(-5);
    q.push(6);

    for _ in 0..10 {
        assert_eq!(q.peek(), Some(-5));
        assert_eq!(q.len(), 2);
        assert!(!q.is_empty());
        assert!(!q.is_full());
    }
}

#[test]
fn peek_is_idempotent_lifo() {
    let mut q = Queue::<i32>::new(&cfg(Discipline::Lifo, 4, false)).unwrap();
    q.push(-5);
    q.push(6);

    for _ in 0..10 {
        assert_eq!(q.peek(), Some(6));
        assert_eq!(q.len(), 2);
    }
}

#[test]
fn byte_peek_is_idempotent() {
    let mut q = ByteQueue::new(1, &cfg(Discipline::Fifo, 2, false)).unwrap();
    q.push(&[42]);
    q.push(&[43]);

    let mut out = [0u8];
    for _ in 0..10 {
        assert!(q.peek(&mut out));
        assert_eq!(out, [42]);
        assert_eq!(q.len(), 2);
    }
}

#[test]
fn peek_matches_next_pop() {
    for discipline in [Discipline::Fifo, Discipline::Lifo] {
        let mut q = Queue::<u8>::new(&cfg(discipline, 4, false)).unwrap();
        q.push(10);
        q.push(20);
        q.push(30);

        while !q.is_empty() {
            let peeked = q.peek();
            assert_eq!(q.pop(), peeked);
        }
    }
}

#[test]
fn drop_discards_exactly_one_record() {
    let mut q = Queue::<u32>::new(&cfg(Discipline::Fifo, 4, false)).unwrap();
    q.push(1);
    q.push(2);
    q.push(3);

    assert!(q.drop_next());
    assert_eq!(q.len(), 2);
    // The dropped record was 1; a plain pop now yields what would have
    // been second.
    assert_eq!(q.pop(), Some(2));
}

#[test]
fn drop_matches_pop_addressing_lifo() {
    let mut q = Queue::<u32>::new(&cfg(Discipline::Lifo, 4, false)).unwrap();
    q.push(1);
    q.push(2);
    q.push(3);

    assert!(q.drop_next()); // discards 3
    assert_eq!(q.pop(), Some(2));
    assert_eq!(q.pop(), Some(1));
    assert!(!q.drop_next());
}

#[test]
fn read_ops_fail_cleanly_on_empty() {
    let mut q = Queue::<u64>::new(&cfg(Discipline::Fifo, 2, false)).unwrap();
    assert_eq!(q.pop(), None);
    assert_eq!(q.peek(), None);
    assert!(!q.drop_next());
    assert_eq!(q.len(), 0);

    let mut bq = ByteQueue::new(3, &cfg(Discipline::Lifo, 2, false)).unwrap();
    let mut out = [9u8; 3];
    assert!(!bq.pop(&mut out));
    assert!(!bq.peek(&mut out));
    assert!(!bq.drop_next());
    // Failed reads leave the out-buffer untouched.
    assert_eq!(out, [9, 9, 9]);
}
