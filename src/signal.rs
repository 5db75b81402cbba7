//! Composite signal - one sign observed at one dimension

use crate::category::Category;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An immutable (sign, dimension) pair.
///
/// Only a [`SignalMatrix`](crate::SignalMatrix) creates these, once per cell,
/// and hands out shared references from then on. Emitters never build one,
/// so comparing by address and comparing by value agree.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Signal<S, D> {
    sign: S,
    dimension: D,
}

impl<S: Category, D: Category> Signal<S, D> {
    pub(crate) fn new(sign: S, dimension: D) -> Self {
        Self { sign, dimension }
    }

    /// What happened.
    #[inline]
    pub fn sign(&self) -> S {
        self.sign
    }

    /// Where or when it happened.
    #[inline]
    pub fn dimension(&self) -> D {
        self.dimension
    }
}

impl<S: Category, D: Category> fmt::Display for Signal<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.sign.name(), self.dimension.name())
    }
}
