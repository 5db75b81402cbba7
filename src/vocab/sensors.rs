//! Sensors - readings relative to a reference point

use crate::composer::{shared_matrix, Vocabulary};
use crate::error::SinkError;
use crate::instrument::Instrument;
use crate::matrix::SignalMatrix;
use crate::signal::Signal;
use crate::sink::Sink;

crate::category! {
    /// Position of a reading.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        Below,
        Nominal,
        Above,
    }
}

crate::category! {
    /// Reference the reading was compared against.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Dimension {
        Baseline,
        Threshold,
        Target,
    }
}

pub type SensorSignal = Signal<Sign, Dimension>;

pub struct Sensors;

impl Vocabulary for Sensors {
    type Sign = Sign;
    type Dimension = Dimension;

    fn matrix() -> &'static SignalMatrix<Sign, Dimension> {
        shared_matrix!(Sign, Dimension)
    }
}

#[derive(Debug)]
pub struct Sensor<K> {
    instrument: Instrument<'static, Sign, Dimension, K>,
}

impl<K: Sink<&'static SensorSignal>> Sensor<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: Instrument::new(Sensors::matrix(), sink),
        }
    }

    #[inline]
    pub fn signal(&self, sign: Sign, dimension: Dimension) -> Result<(), SinkError> {
        self.instrument.signal(sign, dimension)
    }

    pub fn below(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Below, dimension)
    }

    pub fn nominal(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Nominal, dimension)
    }

    pub fn above(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Above, dimension)
    }

    pub fn sink(&self) -> &K {
        self.instrument.sink()
    }
}
