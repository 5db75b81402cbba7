//! Composers and vocabularies
//!
//! A composer turns a sink into an instrument. It holds no state between
//! calls, so a registry can call it once per subject and cache the result.
//!
//! A vocabulary names the two categories of a two-axis signal set and owns
//! the single process-wide matrix every instrument of that vocabulary shares.

use crate::category::Category;
use crate::matrix::SignalMatrix;

/// Factory: sink `K` in, freshly built instrument `I` out.
pub trait Composer<K, I> {
    fn compose(&self, sink: K) -> I;
}

impl<K, I, F: Fn(K) -> I> Composer<K, I> for F {
    #[inline]
    fn compose(&self, sink: K) -> I {
        self(sink)
    }
}

/// A two-axis signal set with one shared matrix.
pub trait Vocabulary: 'static {
    type Sign: Category;
    type Dimension: Category;

    /// The shared matrix, built on first use.
    fn matrix() -> &'static SignalMatrix<Self::Sign, Self::Dimension>;
}

/// Declare the `OnceLock` backing a [`Vocabulary::matrix`] impl.
macro_rules! shared_matrix {
    ($sign:ty, $dimension:ty) => {{
        static MATRIX: std::sync::OnceLock<$crate::SignalMatrix<$sign, $dimension>> =
            std::sync::OnceLock::new();
        MATRIX.get_or_init($crate::SignalMatrix::new)
    }};
}

pub(crate) use shared_matrix;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Instrument;
    use crate::signal::Signal;
    use crate::sink::ChannelSink;
    use std::sync::mpsc;

    crate::category! {
        enum Outcome { Up, Down }
    }

    crate::category! {
        enum Side { Left, Right }
    }

    struct Toggles;

    impl Vocabulary for Toggles {
        type Sign = Outcome;
        type Dimension = Side;

        fn matrix() -> &'static SignalMatrix<Outcome, Side> {
            shared_matrix!(Outcome, Side)
        }
    }

    type Toggle = Instrument<'static, Outcome, Side, ChannelSink<&'static Signal<Outcome, Side>>>;

    fn toggle(sink: ChannelSink<&'static Signal<Outcome, Side>>) -> Toggle {
        Instrument::new(Toggles::matrix(), sink)
    }

    #[test]
    fn test_matrix_is_shared() {
        assert!(std::ptr::eq(Toggles::matrix(), Toggles::matrix()));
    }

    #[test]
    fn test_compose_binds_distinct_sinks() {
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();

        let a = toggle.compose(ChannelSink::new(tx_a));
        let b = toggle.compose(ChannelSink::new(tx_b));

        a.signal(Outcome::Up, Side::Left).unwrap();
        b.signal(Outcome::Down, Side::Right).unwrap();
        b.signal(Outcome::Down, Side::Left).unwrap();

        assert_eq!(rx_a.try_iter().count(), 1);
        assert_eq!(rx_b.try_iter().count(), 2);
    }

    #[test]
    fn test_instruments_share_cells() {
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();
        toggle(ChannelSink::new(tx_a)).signal(Outcome::Up, Side::Right).unwrap();
        toggle(ChannelSink::new(tx_b)).signal(Outcome::Up, Side::Right).unwrap();
        assert!(std::ptr::eq(rx_a.recv().unwrap(), rx_b.recv().unwrap()));
    }
}
