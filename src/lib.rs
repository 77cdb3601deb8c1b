#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

// feature gates
#[doc(hidden)]
macro_rules! cfg_queue {
    ($($item:item)*) => {
        $(
            #[cfg(any(doc, feature = "queue"))]
            $item
        )*
    };
}
#[doc(hidden)]
macro_rules! cfg_stack {
    ($($item:item)*) => {
        $(
            #[cfg(any(doc, feature = "stack"))]
            $item
        )*
    };
}

/// A module containing the error types used by the library.
pub mod error;

/// A module containing the [`Capacity`](capacity::Capacity) limit type.
pub mod capacity;

cfg_queue! {
/// A fixed capacity first-in-first-out queue.
///
/// See [`BoundedQueue`](queue::BoundedQueue).
pub mod queue;
}

cfg_stack! {
/// A last-in-first-out stack with an optional capacity limit.
///
/// See [`BoundedStack`](stack::BoundedStack).
pub mod stack;
}

#[doc(inline)]
pub use capacity::Capacity;
#[doc(inline)]
pub use error::{Error, ErrorKind};

cfg_queue! {
    #[doc(inline)]
    pub use queue::BoundedQueue;
}

cfg_stack! {
    #[doc(inline)]
    pub use stack::BoundedStack;
}
