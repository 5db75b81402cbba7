//! Instruments - per-subject emitters bound to one sink
//!
//! An instrument resolves a signal and sends it. No buffering, filtering,
//! sampling or retry happens here; every call is one lookup and one send.

use crate::category::Category;
use crate::error::SinkError;
use crate::matrix::SignalMatrix;
use crate::signal::Signal;
use crate::sink::Sink;

/// Two-axis emitter: sends `&Signal<S, D>` taken from a shared matrix.
#[derive(Debug)]
pub struct Instrument<'m, S, D, K> {
    matrix: &'m SignalMatrix<S, D>,
    sink: K,
}

impl<'m, S, D, K> Instrument<'m, S, D, K>
where
    S: Category,
    D: Category,
    K: Sink<&'m Signal<S, D>>,
{
    pub fn new(matrix: &'m SignalMatrix<S, D>, sink: K) -> Self {
        Self { matrix, sink }
    }

    /// Emit `sign` at `dimension`.
    #[inline]
    pub fn signal(&self, sign: S, dimension: D) -> Result<(), SinkError> {
        self.sink.send(self.matrix.get(sign, dimension))
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn matrix(&self) -> &'m SignalMatrix<S, D> {
        self.matrix
    }
}

/// Single-axis emitter: sends the sign itself.
#[derive(Debug)]
pub struct SignInstrument<S, K> {
    sink: K,
    _sign: std::marker::PhantomData<fn(S)>,
}

impl<S: Category, K: Sink<S>> SignInstrument<S, K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            _sign: std::marker::PhantomData,
        }
    }

    /// Emit `sign`.
    #[inline]
    pub fn sign(&self, sign: S) -> Result<(), SinkError> {
        self.sink.send(sign)
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{ChannelSink, FnSink};
    use std::sync::mpsc;

    crate::category! {
        enum Outcome { Success, Fail }
    }

    crate::category! {
        enum Stage { Ingress, Egress }
    }

    #[test]
    fn test_signal_sends_matrix_reference() {
        let matrix: SignalMatrix<Outcome, Stage> = SignalMatrix::new();
        let (tx, rx) = mpsc::channel();
        let instrument = Instrument::new(&matrix, ChannelSink::new(tx));

        instrument.signal(Outcome::Fail, Stage::Ingress).unwrap();
        let got = rx.try_recv().unwrap();
        assert!(std::ptr::eq(got, matrix.get(Outcome::Fail, Stage::Ingress)));
    }

    #[test]
    fn test_calls_arrive_in_order() {
        let matrix: SignalMatrix<Outcome, Stage> = SignalMatrix::new();
        let (tx, rx) = mpsc::channel();
        let instrument = Instrument::new(&matrix, ChannelSink::new(tx));

        instrument.signal(Outcome::Success, Stage::Ingress).unwrap();
        instrument.signal(Outcome::Success, Stage::Egress).unwrap();
        instrument.signal(Outcome::Fail, Stage::Egress).unwrap();

        let got: Vec<_> = rx.try_iter().map(|s| (s.sign(), s.dimension())).collect();
        assert_eq!(
            got,
            vec![
                (Outcome::Success, Stage::Ingress),
                (Outcome::Success, Stage::Egress),
                (Outcome::Fail, Stage::Egress),
            ]
        );
    }

    #[test]
    fn test_sink_failure_is_returned_unchanged() {
        let matrix: SignalMatrix<Outcome, Stage> = SignalMatrix::new();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let instrument = Instrument::new(&matrix, ChannelSink::new(tx));
        assert_eq!(
            instrument.signal(Outcome::Success, Stage::Egress),
            Err(SinkError::Closed)
        );
    }

    #[test]
    fn test_sign_instrument() {
        let (tx, rx) = mpsc::channel();
        let instrument = SignInstrument::new(ChannelSink::new(tx));
        instrument.sign(Outcome::Fail).unwrap();
        instrument.sign(Outcome::Success).unwrap();
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Outcome::Fail, Outcome::Success]
        );
    }

    #[test]
    fn test_one_send_per_call() {
        let matrix: SignalMatrix<Outcome, Stage> = SignalMatrix::new();
        let sends = std::sync::atomic::AtomicUsize::new(0);
        let instrument = Instrument::new(
            &matrix,
            FnSink(|_: &Signal<Outcome, Stage>| {
                sends.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }),
        );
        for _ in 0..10 {
            instrument.signal(Outcome::Success, Stage::Ingress).unwrap();
        }
        assert_eq!(sends.load(std::sync::atomic::Ordering::Relaxed), 10);
    }
}
