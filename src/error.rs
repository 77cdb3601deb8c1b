use std::fmt;

/// The three ways an operation on a bounded container can fail.
///
/// Every error type in this crate reports its kind through a `kind` method,
/// so callers that don't care which operation failed can match on this alone.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum ErrorKind {
    /// A container was constructed with a structurally invalid parameter,
    /// e.g. a [`BoundedQueue`](crate::queue::BoundedQueue) with capacity `0`.
    InvalidArgument,
    /// An operation would have exceeded the container's capacity.
    Overflow,
    /// An operation needed an element, but the container was empty.
    Underflow,
}

/// An enumeration listing the failure modes of constructing a container.
///
/// The constructors returning it are
/// - [BoundedQueue::new](crate::queue::BoundedQueue::new)
/// - [BoundedQueue::with_items](crate::queue::BoundedQueue::with_items)
/// - [BoundedStack::with_data](crate::stack::BoundedStack::with_data)
#[derive(PartialEq, Eq, Clone, thiserror::Error)]
pub enum NewError<T> {
    /// The requested capacity can't hold anything.
    #[error("capacity must be greater than 0")]
    InvalidCapacity,
    /// There were more initial items than the capacity allows.
    ///
    /// Contains the items that were rejected, in the order they were given.
    #[error("initial items don't fit in the container's capacity")]
    Overflow(Vec<T>),
}

/// Error for the `push` method of a container.
///
/// This error is returned when the container is already full.
/// Contains the item that failed to be pushed.
#[derive(PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum PushError<T> {
    /// The container was full.
    #[error("pushing to a full container")]
    Overflow(T),
}

/// Error for the `pop` and `peek` methods of a container.
///
/// This error is returned when the container holds no elements.
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum PopError {
    /// The container was empty.
    #[error("reading from an empty container")]
    Underflow,
}

/// A type-erased error that any operation's error converts into.
///
/// Handy for code that chains several container operations with `?`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, thiserror::Error)]
pub enum Error {
    /// See [`ErrorKind::InvalidArgument`].
    #[error("invalid argument: capacity must be greater than 0")]
    InvalidArgument,
    /// See [`ErrorKind::Overflow`].
    #[error("container capacity exceeded")]
    Overflow,
    /// See [`ErrorKind::Underflow`].
    #[error("container is empty")]
    Underflow,
}

impl<T> NewError<T> {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NewError::InvalidCapacity => ErrorKind::InvalidArgument,
            NewError::Overflow(_) => ErrorKind::Overflow,
        }
    }

    /// Takes back the items that were rejected, if any.
    pub fn into_items(self) -> Vec<T> {
        match self {
            NewError::InvalidCapacity => Vec::new(),
            NewError::Overflow(items) => items,
        }
    }
}

impl<T> PushError<T> {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Overflow
    }

    /// Takes back the item that failed to be pushed.
    pub fn into_inner(self) -> T {
        match self {
            PushError::Overflow(item) => item,
        }
    }
}

impl PopError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Underflow
    }
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument => ErrorKind::InvalidArgument,
            Error::Overflow => ErrorKind::Overflow,
            Error::Underflow => ErrorKind::Underflow,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument => Error::InvalidArgument,
            ErrorKind::Overflow => Error::Overflow,
            ErrorKind::Underflow => Error::Underflow,
        }
    }
}

impl<T> From<NewError<T>> for Error {
    fn from(err: NewError<T>) -> Self {
        err.kind().into()
    }
}

impl<T> From<PushError<T>> for Error {
    fn from(err: PushError<T>) -> Self {
        err.kind().into()
    }
}

impl From<PopError> for Error {
    fn from(err: PopError) -> Self {
        err.kind().into()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::InvalidArgument => f.write_str("invalid argument"),
            ErrorKind::Overflow => f.write_str("overflow"),
            ErrorKind::Underflow => f.write_str("underflow"),
        }
    }
}

impl<T> fmt::Debug for NewError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewError::InvalidCapacity => f.write_str("InvalidCapacity"),
            NewError::Overflow(items) => write!(f, "Overflow([..; {}])", items.len()),
        }
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Overflow(..)")
    }
}
