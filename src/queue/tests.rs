use super::*;
use crate::error::{Error, ErrorKind};
use quickcheck_macros::quickcheck;

#[test]
fn new_is_empty() {
    let queue = BoundedQueue::<i32>::new(4).unwrap();

    assert_eq!(queue.len(), 0);
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.available(), 4);
    assert!(queue.is_empty());
    assert!(!queue.is_full());
}

#[test]
fn zero_capacity() {
    let err = BoundedQueue::<i32>::new(0).unwrap_err();
    assert_eq!(err, NewError::InvalidCapacity);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = BoundedQueue::with_items(0, Vec::<i32>::new()).unwrap_err();
    assert_eq!(err, NewError::InvalidCapacity);
}

#[test]
fn too_many_items() {
    let err = BoundedQueue::with_items(1, ["test", "test2"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert_eq!(err.into_items(), vec!["test", "test2"]);
}

#[test]
fn with_items() {
    let queue = BoundedQueue::with_items(2, ["test"]).unwrap();
    assert_eq!(queue.available(), 1);
    assert_eq!(queue.len(), 1);

    let queue = BoundedQueue::with_items(1, ["test"]).unwrap();
    assert!(queue.is_full());
}

#[test]
fn insert_remove() {
    let mut queue = BoundedQueue::new(4).unwrap();

    assert_eq!(queue.push(1), Ok(()));
    assert_eq!(queue.push(2), Ok(()));
    assert_eq!(queue.push(3), Ok(()));
    assert_eq!(queue.push(4), Ok(()));
    assert_eq!(queue.push(5), Err(PushError::Overflow(5)));
    assert_eq!(queue.len(), 4);

    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.pop(), Ok(2));
    assert_eq!(queue.pop(), Ok(3));
    assert_eq!(queue.pop(), Ok(4));
    assert_eq!(queue.pop(), Err(PopError::Underflow));
    assert_eq!(queue.len(), 0);
}

#[test]
fn underflow() {
    let mut queue = BoundedQueue::<&str>::new(1).unwrap();
    assert_eq!(queue.pop(), Err(PopError::Underflow));
    assert_eq!(queue.peek(), Err(PopError::Underflow));
    assert_eq!(queue.peek_mut().unwrap_err().kind(), ErrorKind::Underflow);
    assert!(queue.is_empty());
}

#[test]
fn reuses_slots() {
    // five through a queue of three to test wrap-around
    let mut queue = BoundedQueue::new(3).unwrap();
    for i in 0..5 {
        queue.push(i).unwrap();
        if queue.is_full() {
            assert_eq!(queue.pop(), Ok(i - 2));
        }
    }
    assert_eq!(queue.items(), vec![3, 4]);
    assert_eq!(queue.available(), 1);
}

#[test]
fn peek() {
    let mut queue = BoundedQueue::with_items(1, ["test"]).unwrap();

    assert_eq!(queue.peek(), Ok(&"test"));
    assert_eq!(queue.peek(), Ok(&"test"));
    assert_eq!(queue.len(), 1);

    *queue.peek_mut().unwrap() = "changed";
    assert_eq!(queue.pop(), Ok("changed"));
}

#[test]
fn scenario_fill_to_overflow() {
    let mut queue = BoundedQueue::with_items(2, ["x"]).unwrap();
    assert_eq!(queue.available(), 1);

    queue.push("y").unwrap();
    assert!(queue.is_full());

    let err = queue.push("z").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert_eq!(err.into_inner(), "z");
    assert_eq!(queue.items(), vec!["x", "y"]);
}

#[test]
fn for_each_mutates() {
    let mut queue = BoundedQueue::with_items(2, vec!["test".to_owned(); 2]).unwrap();

    let mut i = 0;
    queue.for_each(0, |item, _| {
        item.push_str(&i.to_string());
        i += 1;
    });

    assert_eq!(queue.pop().unwrap(), "test0");
    assert_eq!(queue.pop().unwrap(), "test1");
}

#[test]
fn for_each_logical_indices() {
    let mut queue = BoundedQueue::with_items(4, [10, 20, 30, 40]).unwrap();
    queue.pop().unwrap();
    queue.pop().unwrap();
    queue.push(50).unwrap();

    let mut seen = Vec::new();
    queue.for_each(1, |item, index| seen.push((*item, index)));
    assert_eq!(seen, vec![(40, 1), (50, 2)]);

    let mut visited = 0;
    queue.for_each(3, |_, _| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn iterators() {
    let mut queue = BoundedQueue::with_items(3, [1, 2, 3]).unwrap();
    queue.pop().unwrap();
    queue.push(4).unwrap();

    assert_eq!(queue.iter().len(), 3);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);

    for item in &mut queue {
        *item *= 2;
    }
    assert_eq!(queue.clone().into_iter().collect::<Vec<_>>(), vec![4, 6, 8]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn clear() {
    let mut queue = BoundedQueue::with_items(2, ['a', 'b']).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 2);
    queue.push('c').unwrap();
    assert_eq!(queue.peek(), Ok(&'c'));
}

#[test]
fn drop() {
    use std::rc::Rc;
    let rc = Rc::new(());
    {
        let mut queue = BoundedQueue::new(5).unwrap();
        for _ in 0..5 {
            queue.push(rc.clone()).unwrap();
        }
        queue.pop().unwrap();
    }
    assert_eq!(Rc::strong_count(&rc), 1);
}

#[test]
fn push_non_copy() {
    let mut queue = BoundedQueue::<Box<str>>::new(1).unwrap();
    queue.push("Hello".to_owned().into_boxed_str()).unwrap();
    assert_eq!(&*queue.pop().unwrap(), "Hello");
}

#[test]
fn debug() {
    let queue = BoundedQueue::with_items(3, [1, 2]).unwrap();
    assert_eq!(
        format!("{queue:?}"),
        "BoundedQueue { capacity: 3, items: [1, 2] }"
    );
}

#[test]
fn erased_errors() {
    fn run() -> Result<u8, Error> {
        let mut queue = BoundedQueue::new(1)?;
        queue.push(1)?;
        queue.push(2)?;
        Ok(queue.pop()?)
    }
    assert_eq!(run(), Err(Error::Overflow));
}

#[quickcheck]
fn push_grows_by_one(capacity: u8, items: Vec<u16>) -> bool {
    let capacity = capacity as usize + 1;
    let mut queue = BoundedQueue::new(capacity).unwrap();
    for (pushed, item) in items.into_iter().enumerate() {
        let full = queue.is_full();
        let before = queue.len();
        match queue.push(item) {
            Ok(()) if !full && queue.len() == pushed + 1 => {}
            Err(PushError::Overflow(back)) if full && back == item && queue.len() == before => {}
            _ => return false,
        }
        if queue.available() + queue.len() != queue.capacity() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fifo_order(items: Vec<i32>) -> bool {
    let mut queue = BoundedQueue::new(items.len().max(1)).unwrap();
    for &item in &items {
        queue.push(item).unwrap();
    }
    let mut popped = Vec::new();
    while let Ok(item) = queue.pop() {
        popped.push(item);
    }
    popped == items && queue.pop() == Err(PopError::Underflow)
}

#[quickcheck]
fn interleaved_matches_model(ops: Vec<Option<u8>>) -> bool {
    use std::collections::VecDeque;
    const CAPACITY: usize = 5;
    let mut queue = BoundedQueue::new(CAPACITY).unwrap();
    let mut model = VecDeque::new();
    for op in ops {
        match op {
            Some(item) => {
                let expected = if model.len() < CAPACITY {
                    model.push_back(item);
                    Ok(())
                } else {
                    Err(PushError::Overflow(item))
                };
                if queue.push(item) != expected {
                    return false;
                }
            }
            None => {
                if queue.pop().ok() != model.pop_front() {
                    return false;
                }
            }
        }
        if queue.peek().ok() != model.front() || !queue.iter().eq(model.iter()) {
            return false;
        }
    }
    true
}
