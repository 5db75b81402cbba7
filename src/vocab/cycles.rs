//! Cycles - whether a value is new, repeating, or coming back

use crate::error::SinkError;
use crate::instrument::SignInstrument;
use crate::sink::Sink;

crate::category! {
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        /// First and only occurrence so far
        Single,
        /// Same as the immediately preceding occurrence
        Repeat,
        /// Seen before, but not immediately preceding
        Return,
    }
}

#[derive(Debug)]
pub struct Cycle<K> {
    instrument: SignInstrument<Sign, K>,
}

impl<K: Sink<Sign>> Cycle<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: SignInstrument::new(sink),
        }
    }

    #[inline]
    pub fn sign(&self, sign: Sign) -> Result<(), SinkError> {
        self.instrument.sign(sign)
    }

    pub fn single(&self) -> Result<(), SinkError> {
        self.sign(Sign::Single)
    }

    pub fn repeat(&self) -> Result<(), SinkError> {
        self.sign(Sign::Repeat)
    }

    /// Emit [`Sign::Return`].
    pub fn ret(&self) -> Result<(), SinkError> {
        self.sign(Sign::Return)
    }

    pub fn sink(&self) -> &K {
        self.instrument.sink()
    }
}
