//! Tasks - lifecycle of units of asynchronous work
//!
//! The dimension records perspective: `Release` when the party doing the
//! work reports it, `Receipt` when a party waiting on the work observes it.

use crate::composer::{shared_matrix, Vocabulary};
use crate::error::SinkError;
use crate::instrument::Instrument;
use crate::matrix::SignalMatrix;
use crate::signal::Signal;
use crate::sink::Sink;

crate::category! {
    /// Task lifecycle event.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        Submit,
        Reject,
        Schedule,
        Start,
        Progress,
        Suspend,
        Resume,
        Complete,
        Fail,
        Cancel,
        Timeout,
    }
}

crate::category! {
    /// Who observed the event.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Dimension {
        Release,
        Receipt,
    }
}

pub type TaskSignal = Signal<Sign, Dimension>;

pub struct Tasks;

impl Vocabulary for Tasks {
    type Sign = Sign;
    type Dimension = Dimension;

    fn matrix() -> &'static SignalMatrix<Sign, Dimension> {
        shared_matrix!(Sign, Dimension)
    }
}

#[derive(Debug)]
pub struct Task<K> {
    instrument: Instrument<'static, Sign, Dimension, K>,
}

impl<K: Sink<&'static TaskSignal>> Task<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: Instrument::new(Tasks::matrix(), sink),
        }
    }

    #[inline]
    pub fn signal(&self, sign: Sign, dimension: Dimension) -> Result<(), SinkError> {
        self.instrument.signal(sign, dimension)
    }

    pub fn submit(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Submit, dimension)
    }

    pub fn reject(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Reject, dimension)
    }

    pub fn schedule(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Schedule, dimension)
    }

    pub fn start(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Start, dimension)
    }

    pub fn progress(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Progress, dimension)
    }

    pub fn suspend(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Suspend, dimension)
    }

    pub fn resume(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Resume, dimension)
    }

    pub fn complete(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Complete, dimension)
    }

    pub fn fail(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Fail, dimension)
    }

    pub fn cancel(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Cancel, dimension)
    }

    pub fn timeout(&self, dimension: Dimension) -> Result<(), SinkError> {
        self.signal(Sign::Timeout, dimension)
    }

    pub fn sink(&self) -> &K {
        self.instrument.sink()
    }
}
