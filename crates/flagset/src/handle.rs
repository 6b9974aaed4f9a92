//! Opaque handles returned when flags are defined.
//!
//! The registry keeps ownership of every value; a handle is only a key used to
//! read the current value back through [`Flags`](crate::Flags) after parsing.

use crate::value::FlagValue;
use std::fmt;
use std::marker::PhantomData;

/// Handle to a long flag holding a `T`.
pub struct Flag<T: FlagValue> {
    index: usize,
    _ty: PhantomData<fn() -> T>,
}

impl<T: FlagValue> Flag<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _ty: PhantomData,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

// Manual impls: derives would put the bounds on `T` instead of the handle.
impl<T: FlagValue> Clone for Flag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FlagValue> Copy for Flag<T> {}

impl<T: FlagValue> PartialEq for Flag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T: FlagValue> Eq for Flag<T> {}

impl<T: FlagValue> fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("index", &self.index)
            .field("type", &T::TYPE)
            .finish()
    }
}

/// Handle to a short flag's occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Short {
    index: usize,
}

impl Short {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}
