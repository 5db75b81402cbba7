//! Signal matrix - dense two-key table built once, read forever
//!
//! Every (primary, secondary) coordinate maps to exactly one value created
//! during construction. Lookup is a single multiply-add on the two
//! ordinals followed by a slice index; it never allocates and never hashes.
//!
//! ## Layout
//!
//! Row-major: `table[a.ordinal() * cols + b.ordinal()]`, where `cols` is the
//! number of secondary members.
//!
//! ## Sharing
//!
//! After construction the matrix is read-only, so `&SignalMatrix` can be
//! handed to any number of threads without locking. Vocabularies keep one in
//! a `OnceLock` static so it is built exactly once per process.

use crate::category::Category;
use crate::error::{Result, VocabError};
use crate::signal::Signal;
use std::marker::PhantomData;

/// Dense |A| x |B| table of precomputed values.
#[derive(Debug)]
pub struct SignalMatrix<A, B, V = Signal<A, B>> {
    table: Box<[V]>,
    cols: usize,
    _axes: PhantomData<fn() -> (A, B)>,
}

impl<A: Category, B: Category, V> SignalMatrix<A, B, V> {
    /// Build a matrix from explicit member lists.
    ///
    /// Each list must hold every member of its category in ordinal order.
    /// `combine` runs exactly once per cell, row by row, and never again.
    pub fn build<F>(primary: &[A], secondary: &[B], mut combine: F) -> Result<Self>
    where
        F: FnMut(A, B) -> V,
    {
        check_members(primary)?;
        check_members(secondary)?;

        let rows = primary.len();
        let cols = secondary.len();
        let mut table = Vec::with_capacity(rows * cols);
        for &a in primary {
            for &b in secondary {
                table.push(combine(a, b));
            }
        }

        tracing::debug!(
            primary = A::NAME,
            secondary = B::NAME,
            cells = table.len(),
            "signal matrix built"
        );

        Ok(Self {
            table: table.into_boxed_slice(),
            cols,
            _axes: PhantomData,
        })
    }

    /// Build over every member of both categories.
    pub fn with<F>(combine: F) -> Result<Self>
    where
        F: FnMut(A, B) -> V,
    {
        Self::build(A::ALL, B::ALL, combine)
    }

    /// The unique value at (a, b).
    ///
    /// # Panics
    /// If a `Category` impl reports an ordinal outside its own `ALL`.
    #[inline]
    pub fn get(&self, a: A, b: B) -> &V {
        let col = b.ordinal();
        // Without this a bad column would silently land in the next row
        assert!(
            col < self.cols,
            "{} ordinal {col} out of range for {} members",
            B::NAME,
            self.cols
        );
        &self.table[a.ordinal() * self.cols + col]
    }

    /// Number of primary members.
    #[inline]
    pub fn rows(&self) -> usize {
        self.table.len() / self.cols
    }

    /// Number of secondary members.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; a built matrix has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (A, B, &V)> + '_ {
        self.table.iter().enumerate().map(move |(i, v)| {
            (A::ALL[i / self.cols], B::ALL[i % self.cols], v)
        })
    }
}

impl<A: Category, B: Category> SignalMatrix<A, B> {
    /// Build the canonical matrix of [`Signal`]s.
    ///
    /// # Panics
    /// If either category's `ALL` is empty or out of ordinal order. That is
    /// a defect in the `Category` impl, which `category!` never produces.
    pub fn new() -> Self {
        Self::with(Signal::new).unwrap_or_else(|err| panic!("malformed category: {err}"))
    }
}

impl<A: Category, B: Category> Default for SignalMatrix<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_members<C: Category>(members: &[C]) -> Result<()> {
    if members.is_empty() {
        return Err(VocabError::EmptyCategory(C::NAME));
    }
    if members.len() != C::count() {
        return Err(VocabError::IncompleteCategory {
            category: C::NAME,
            expected: C::count(),
            actual: members.len(),
        });
    }
    for (position, member) in members.iter().enumerate() {
        let ordinal = member.ordinal();
        if ordinal != position {
            return Err(VocabError::OrdinalMismatch {
                category: C::NAME,
                position,
                ordinal,
            });
        }
    }
    Ok(())
}
