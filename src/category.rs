//! Categories - closed enumerations that form the axes of a vocabulary
//!
//! A category is a fieldless enum whose members are known at definition
//! time. The only thing the rest of the crate needs from it is the full
//! member list and a dense zero-based ordinal for indexing.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed, finite, totally ordered set of named members.
///
/// `ALL` must list every member exactly once, in ordinal order, so that
/// `ALL[m.ordinal()] == m` holds for every member. Implement it with
/// [`category!`](crate::category) rather than by hand.
pub trait Category: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every member, indexed by ordinal.
    const ALL: &'static [Self];

    /// Type name, used in errors and logs.
    const NAME: &'static str;

    /// Zero-based position of this member.
    fn ordinal(self) -> usize;

    /// Member identifier as declared.
    fn name(self) -> &'static str;

    /// Number of members.
    #[inline]
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Member at `ordinal`, if in range.
    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

/// Declare a fieldless enum and implement [`Category`] for it.
///
/// Members take no discriminants; ordinal is declaration order. An empty
/// member list does not match the macro.
///
/// ```
/// use signal_vocabulary::Category;
///
/// signal_vocabulary::category! {
///     /// Where a packet was observed.
///     enum Stage { Ingress, Transit, Egress }
/// }
///
/// assert_eq!(Stage::count(), 3);
/// assert_eq!(Stage::Transit.ordinal(), 1);
/// assert_eq!(Stage::Egress.name(), "Egress");
/// ```
#[macro_export]
macro_rules! category {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::Category for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
