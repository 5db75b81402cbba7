//! Flows - work moving through ingress, transit and egress

use crate::composer::{shared_matrix, Vocabulary};
use crate::error::SinkError;
use crate::instrument::Instrument;
use crate::matrix::SignalMatrix;
use crate::signal::Signal;
use crate::sink::Sink;

crate::category! {
    /// Outcome of moving an item.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        Success,
        Fail,
    }
}

crate::category! {
    /// Stage at which the outcome was observed.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Dimension {
        Ingress,
        Transit,
        Egress,
    }
}

pub type FlowSignal = Signal<Sign, Dimension>;

/// The flows vocabulary.
pub struct Flows;

impl Vocabulary for Flows {
    type Sign = Sign;
    type Dimension = Dimension;

    fn matrix() -> &'static SignalMatrix<Sign, Dimension> {
        shared_matrix!(Sign, Dimension)
    }
}

/// Emitter for one flow.
#[derive(Debug)]
pub struct Flow<K> {
    instrument: Instrument<'static, Sign, Dimension, K>,
}

impl<K: Sink<&'static FlowSignal>> Flow<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: Instrument::new(Flows::matrix(), sink),
        }
    }

    #[inline]
    pub fn signal(&self, sign: Sign, dimension: Dimension) -> Result<(), SinkError> {
        self.instrument.signal(sign, dimension)
    }

    pub fn success(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Success, dimension)
    }

    pub fn fail(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Fail, dimension)
    }

    pub fn sink(&self) -> &K {
        self.instrument.sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ChannelSink;
    use std::sync::mpsc;

    #[test]
    fn test_convenience_matches_signal() {
        let (tx, rx) = mpsc::channel();
        let flow = Flow::compose(ChannelSink::new(tx));

        flow.success(Dimension::Transit).unwrap();
        flow.signal(Sign::Success, Dimension::Transit).unwrap();
        flow.fail(Dimension::Egress).unwrap();

        let got: Vec<&FlowSignal> = rx.try_iter().collect();
        assert_eq!(got.len(), 3);
        assert!(std::ptr::eq(got[0], got[1]));
        assert_eq!(got[2].sign(), Sign::Fail);
        assert_eq!(got[2].dimension(), Dimension::Egress);
    }

    #[test]
    fn test_matrix_covers_vocabulary() {
        assert_eq!(Flows::matrix().len(), 6);
    }
}
