use log::{debug, trace};
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

#[doc(inline)]
pub use crate::error::{NewError, PopError, PushError};

mod inner;
use inner::Inner;

#[cfg(test)]
mod tests;

/// A first-in-first-out queue holding at most a fixed number of elements.
///
/// The capacity is chosen at construction and never changes. The storage
/// for all of it is allocated up front, so [`push`](BoundedQueue::push)
/// never reallocates; it fails with [`PushError::Overflow`] instead.
///
/// # Example
///
/// ```
/// use bounded_qs::queue::{BoundedQueue, PushError};
///
/// let mut queue = BoundedQueue::with_items(2, ["x"]).unwrap();
/// assert_eq!(queue.available(), 1);
///
/// queue.push("y").unwrap();
/// assert!(queue.is_full());
/// assert_eq!(queue.push("z"), Err(PushError::Overflow("z")));
///
/// assert_eq!(queue.pop(), Ok("x"));
/// assert_eq!(queue.pop(), Ok("y"));
/// ```
#[derive(Clone)]
pub struct BoundedQueue<T> {
    inner: Inner<T>,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue with room for `capacity` elements.
    ///
    /// Returns [`NewError::InvalidCapacity`] if `capacity` is `0`.
    pub fn new(capacity: usize) -> Result<Self, NewError<T>> {
        if capacity < 1 {
            debug!("rejected queue capacity {capacity}");
            return Err(NewError::InvalidCapacity);
        }
        trace!("new queue with capacity {capacity}");
        Ok(Self {
            inner: Inner::new(capacity),
        })
    }

    /// Creates a queue with room for `capacity` elements, holding `items`.
    ///
    /// The first item yielded by `items` is the first one popped.
    ///
    /// Returns [`NewError::InvalidCapacity`] if `capacity` is `0` and
    /// [`NewError::Overflow`] with all of `items` if there are more than `capacity` of them.
    pub fn with_items<I>(capacity: usize, items: I) -> Result<Self, NewError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        if capacity < 1 {
            debug!("rejected queue capacity {capacity}");
            return Err(NewError::InvalidCapacity);
        }
        let items: Vec<T> = items.into_iter().collect();
        if items.len() > capacity {
            debug!(
                "rejected {} initial items for queue capacity {capacity}",
                items.len()
            );
            return Err(NewError::Overflow(items));
        }
        trace!(
            "new queue with capacity {capacity} and {} initial items",
            items.len()
        );
        Ok(Self {
            inner: Inner::from_vec(capacity, items),
        })
    }

    /// Appends `item` at the tail of the queue.
    ///
    /// If the queue is full, the queue is left untouched and `item` is
    /// handed back in [`PushError::Overflow`].
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        self.inner.push_back(item).map_err(|item| {
            debug!("queue push rejected: full at capacity {}", self.capacity());
            PushError::Overflow(item)
        })
    }

    /// Removes and returns the element at the head of the queue,
    /// i.e. the oldest one.
    pub fn pop(&mut self) -> Result<T, PopError> {
        self.inner.pop_front().ok_or_else(|| {
            debug!("queue pop rejected: empty");
            PopError::Underflow
        })
    }

    /// Returns the element at the head of the queue without removing it.
    pub fn peek(&self) -> Result<&T, PopError> {
        self.inner.front().ok_or_else(|| {
            debug!("queue peek rejected: empty");
            PopError::Underflow
        })
    }

    /// Like [`peek`](BoundedQueue::peek), but allows modifying the head in place.
    pub fn peek_mut(&mut self) -> Result<&mut T, PopError> {
        self.inner.front_mut().ok_or_else(|| {
            debug!("queue peek rejected: empty");
            PopError::Underflow
        })
    }

    /// Checks if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Checks if the queue holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.len() == self.inner.capacity()
    }

    /// The number of elements currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// The maximum number of elements the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// How many more elements can be pushed before the queue is full.
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }

    /// Removes every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Calls `f` on every element from logical index `start` onwards,
    /// head first.
    ///
    /// `f` receives a mutable reference to the element and its index, where
    /// the head has index `0`. Changes made through the reference stay in
    /// the queue. A `start` at or past [`len`](BoundedQueue::len) visits nothing.
    ///
    /// ```
    /// use bounded_qs::queue::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::with_items(2, vec!["test".to_owned(); 2]).unwrap();
    /// queue.for_each(0, |item, i| item.push_str(&i.to_string()));
    ///
    /// assert_eq!(queue.pop().unwrap(), "test0");
    /// assert_eq!(queue.pop().unwrap(), "test1");
    /// ```
    pub fn for_each<F>(&mut self, start: usize, mut f: F)
    where
        F: FnMut(&mut T, usize),
    {
        for (index, item) in self.iter_mut().enumerate().skip(start) {
            f(item, index);
        }
    }

    /// Returns an iterator over the elements, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.inner.slots();
        Iter { front, back }
    }

    /// Returns an iterator that allows modifying each element, head first.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.inner.slots_mut();
        IterMut { front, back }
    }

    /// Copies the current contents into a `Vec`, head first.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// An iterator over the elements of a [`BoundedQueue`], head first.
///
/// Created by [`BoundedQueue::iter`].
pub struct Iter<'a, T> {
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
}

/// A mutable iterator over the elements of a [`BoundedQueue`], head first.
///
/// Created by [`BoundedQueue::iter_mut`].
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
}

/// An owning iterator that pops a [`BoundedQueue`] until it's empty.
///
/// Created by the `into_iter` method of [`BoundedQueue`].
pub struct IntoIter<T> {
    queue: BoundedQueue<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = match self.front.next() {
            Some(slot) => slot,
            None => self.back.next()?,
        };
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let slot = match self.front.next() {
            Some(slot) => slot,
            None => self.back.next()?,
        };
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.inner.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for BoundedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
