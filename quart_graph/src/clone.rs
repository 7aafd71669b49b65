//! The deep-copy capability a payload must provide for graph cloning.

use std::convert::Infallible;

/// A payload that can produce an independent copy of itself.
///
/// Every `Clone` type gets this for free with an infallible error. Payloads
/// whose copy can fail (or that hold shared handles needing special care)
/// implement it directly instead of `Clone`. Implementations over
/// self-referential data must guard against infinite recursion themselves.
pub trait DeepClone: Sized {
    type Error;

    /// Produce a copy sharing no mutable state with `self`.
    fn deep_clone(&self) -> Result<Self, Self::Error>;
}

impl<T: Clone> DeepClone for T {
    type Error = Infallible;

    fn deep_clone(&self) -> Result<Self, Self::Error> {
        Ok(self.clone())
    }
}
