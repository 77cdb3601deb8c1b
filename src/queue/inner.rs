use std::iter;
use std::slice;

/// Fixed ring of slots backing a [`BoundedQueue`](super::BoundedQueue).
///
/// The slots are allocated once in [`Inner::new`] and never reallocated.
/// Occupied slots form one window starting at `head` and wrapping around
/// the end of `buffer`; every slot outside the window is `None`.
#[derive(Clone)]
pub(super) struct Inner<T> {
    buffer: Box<[Option<T>]>,
    //index of the oldest element
    head: usize,
    len: usize,
}

impl<T> Inner<T> {
    pub(super) fn new(capacity: usize) -> Self {
        // should already be ensured in BoundedQueue::new()
        debug_assert!(capacity > 0, "capacity was zero");
        Self {
            buffer: iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Builds a ring with `items` already in place, oldest first.
    pub(super) fn from_vec(capacity: usize, items: Vec<T>) -> Self {
        debug_assert!(capacity > 0, "capacity was zero");
        debug_assert!(items.len() <= capacity, "items didn't fit");
        let len = items.len();
        Self {
            buffer: items
                .into_iter()
                .map(Some)
                .chain(iter::repeat_with(|| None))
                .take(capacity)
                .collect(),
            head: 0,
            len,
        }
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Maps an offset from `head` to an index into `buffer`.
    #[inline]
    fn wrap(&self, offset: usize) -> usize {
        //head < cap and offset <= cap, so the sum can't overflow
        //and a single subtraction brings it back in range.
        let index = self.head + offset;
        if index >= self.capacity() {
            index - self.capacity()
        } else {
            index
        }
    }

    pub(super) fn push_back(&mut self, item: T) -> Result<(), T> {
        if self.len == self.capacity() {
            return Err(item);
        }
        let tail = self.wrap(self.len);
        debug_assert!(self.buffer[tail].is_none(), "tail slot was occupied");
        self.buffer[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub(super) fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buffer[self.head].take();
        self.head = self.wrap(1);
        self.len -= 1;
        if self.len == 0 {
            //keep the window at the start while we can
            self.head = 0;
        }
        item
    }

    pub(super) fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    pub(super) fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_mut()
    }

    pub(super) fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Splits the occupied window into the part up to the end of `buffer`
    /// and the part that wrapped around to its start.
    fn window(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let end = self.head + self.len;
        if end <= self.capacity() {
            (self.head..end, 0..0)
        } else {
            (self.head..self.capacity(), 0..end - self.capacity())
        }
    }

    pub(super) fn slots(&self) -> (slice::Iter<'_, Option<T>>, slice::Iter<'_, Option<T>>) {
        let (front, back) = self.window();
        (self.buffer[front].iter(), self.buffer[back].iter())
    }

    pub(super) fn slots_mut(
        &mut self,
    ) -> (slice::IterMut<'_, Option<T>>, slice::IterMut<'_, Option<T>>) {
        let (front, back) = self.window();
        //back always ends at or before front starts
        let (low, high) = self.buffer.split_at_mut(front.start);
        (
            high[..front.end - front.start].iter_mut(),
            low[back].iter_mut(),
        )
    }
}
