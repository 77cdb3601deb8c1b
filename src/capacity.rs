use std::num::NonZeroUsize;

/// The element limit of a [`BoundedStack`](crate::stack::BoundedStack).
///
/// A plain `usize` of `0` converts to [`Capacity::Unlimited`], so
/// `BoundedStack::with_capacity(0)` means "no limit", never "holds nothing".
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Default)]
pub enum Capacity {
    /// No limit; the container grows as needed and is never full.
    #[default]
    Unlimited,
    /// At most this many elements.
    Limited(NonZeroUsize),
}

impl Capacity {
    /// Creates a limit of `n` elements, or [`Unlimited`](Capacity::Unlimited) when `n == 0`.
    pub const fn new(n: usize) -> Self {
        match NonZeroUsize::new(n) {
            Some(n) => Capacity::Limited(n),
            None => Capacity::Unlimited,
        }
    }

    /// The limit as a `usize`, with `0` standing for unlimited.
    pub const fn get(self) -> usize {
        match self {
            Capacity::Unlimited => 0,
            Capacity::Limited(n) => n.get(),
        }
    }

    /// Checks if this is [`Capacity::Unlimited`].
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Capacity::Unlimited)
    }

    /// Checks if `len` elements may be held under this limit.
    pub const fn admits(self, len: usize) -> bool {
        match self {
            Capacity::Unlimited => true,
            Capacity::Limited(n) => len <= n.get(),
        }
    }

    /// Checks if a container holding `len` elements has no room left.
    ///
    /// Always `false` for [`Capacity::Unlimited`].
    pub const fn is_exhausted_by(self, len: usize) -> bool {
        match self {
            Capacity::Unlimited => false,
            Capacity::Limited(n) => len >= n.get(),
        }
    }

    /// How many more elements fit next to `len` existing ones.
    ///
    /// # Note
    ///
    /// Returns `0` for [`Capacity::Unlimited`] too, so `0` is ambiguous here.
    /// Check [`is_unlimited`](Capacity::is_unlimited) first if the difference matters.
    pub const fn remaining(self, len: usize) -> usize {
        self.get().saturating_sub(len)
    }
}

impl From<usize> for Capacity {
    fn from(n: usize) -> Self {
        Capacity::new(n)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Capacity::Limited(n)
    }
}

impl From<Option<NonZeroUsize>> for Capacity {
    fn from(n: Option<NonZeroUsize>) -> Self {
        n.map_or(Capacity::Unlimited, Capacity::Limited)
    }
}

impl From<Capacity> for Option<NonZeroUsize> {
    fn from(capacity: Capacity) -> Self {
        match capacity {
            Capacity::Unlimited => None,
            Capacity::Limited(n) => Some(n),
        }
    }
}
