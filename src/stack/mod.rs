use crate::capacity::Capacity;
use log::{debug, trace};
use std::fmt;

#[doc(inline)]
pub use crate::error::{NewError, PopError, PushError};


/// A last-in-first-out stack with an optional element limit.
///
/// The limit is a [`Capacity`]. A plain `0` means
/// [`Capacity::Unlimited`], so such a stack is never full.
///
/// # Example
///
/// ```
/// use bounded_qs::stack::{BoundedStack, PushError};
///
/// let mut stack = BoundedStack::with_data(1, ["x"]).unwrap();
/// assert_eq!(stack.push("y"), Err(PushError::Overflow("y")));
///
/// assert_eq!(stack.pop(), Ok("x"));
/// assert!(stack.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    //the last element is the top
    data: Vec<T>,
    limit: Capacity,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack without a limit.
    pub fn new() -> Self {
        Self::with_limit(Capacity::Unlimited)
    }

    /// Creates an empty stack holding at most `capacity` elements.
    ///
    /// Never fails; a `capacity` of `0` means unlimited.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_limit(Capacity::new(capacity))
    }

    /// Creates an empty stack with the given limit.
    pub fn with_limit(limit: Capacity) -> Self {
        trace!("new stack with capacity {:?}", limit);
        Self {
            data: Vec::new(),
            limit,
        }
    }

    /// Creates a stack holding `data`, whose last element becomes the top.
    ///
    /// A `capacity` of `0` means unlimited. Returns [`NewError::Overflow`]
    /// with all of `data` if `capacity` isn't `0` and `data` is longer.
    pub fn with_data<I>(capacity: usize, data: I) -> Result<Self, NewError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_limit_and_data(Capacity::new(capacity), data)
    }

    /// Like [`with_data`](BoundedStack::with_data), but takes the limit as a [`Capacity`].
    pub fn with_limit_and_data<I>(limit: Capacity, data: I) -> Result<Self, NewError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = data.into_iter().collect();
        if !limit.admits(data.len()) {
            debug!(
                "rejected {} initial items for stack capacity {}",
                data.len(),
                limit.get()
            );
            return Err(NewError::Overflow(data));
        }
        trace!(
            "new stack with capacity {:?} and {} initial items",
            limit,
            data.len()
        );
        Ok(Self { data, limit })
    }

    /// Pushes `item` on top of the stack.
    ///
    /// If the stack is full, the stack is left untouched and `item` is
    /// handed back in [`PushError::Overflow`].
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            debug!("stack push rejected: full at capacity {}", self.capacity());
            return Err(PushError::Overflow(item));
        }
        self.data.push(item);
        Ok(())
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, PopError> {
        self.data.pop().ok_or_else(|| {
            debug!("stack pop rejected: empty");
            PopError::Underflow
        })
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, PopError> {
        self.data.last().ok_or_else(|| {
            debug!("stack peek rejected: empty");
            PopError::Underflow
        })
    }

    /// Like [`peek`](BoundedStack::peek), but allows modifying the top in place.
    pub fn peek_mut(&mut self) -> Result<&mut T, PopError> {
        self.data.last_mut().ok_or_else(|| {
            debug!("stack peek rejected: empty");
            PopError::Underflow
        })
    }

    /// Checks if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the stack has reached its limit.
    ///
    /// Always `false` for an unlimited stack.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.limit.is_exhausted_by(self.data.len())
    }

    /// The number of elements currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The element limit, with `0` standing for unlimited.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limit.get()
    }

    /// The element limit.
    #[inline]
    pub fn limit(&self) -> Capacity {
        self.limit
    }

    /// How many more elements can be pushed before the stack is full.
    ///
    /// # Note
    ///
    /// An unlimited stack reports `0` as well, same as a full one.
    /// Use [`is_full`](BoundedStack::is_full) to tell them apart.
    #[inline]
    pub fn available(&self) -> usize {
        self.limit.remaining(self.data.len())
    }

    /// Removes every element, keeping the limit.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.limit)
            .field("data", &self.data)
            .finish()
    }
}
