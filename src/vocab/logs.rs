//! Logs - severity-only signals

use crate::error::SinkError;
use crate::instrument::SignInstrument;
use crate::sink::Sink;

crate::category! {
    /// Severity of a logged occurrence, most severe first.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        Severe,
        Warning,
        Info,
        Debug,
    }
}

#[derive(Debug)]
pub struct Log<K> {
    instrument: SignInstrument<Sign, K>,
}

impl<K: Sink<Sign>> Log<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: SignInstrument::new(sink),
        }
    }

    #[inline]
    pub fn sign(&self, sign: Sign) -> Result<(), SinkError> {
        self.instrument.sign(sign)
    }

    pub fn severe(&self) -> Result<(), SinkError> {
        self.sign(Sign::Severe)
    }

    pub fn warning(&self) -> Result<(), SinkError> {
        self.sign(Sign::Warning)
    }

    pub fn info(&self) -> Result<(), SinkError> {
        self.sign(Sign::Info)
    }

    pub fn debug(&self) -> Result<(), SinkError> {
        self.sign(Sign::Debug)
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
    fn test_severities() {
        let (tx, rx) = mpsc::channel();
        let log = Log::compose(ChannelSink::new(tx));

        log.severe().unwrap();
        log.warning().unwrap();
        log.info().unwrap();
        log.debug().unwrap();
        log.sign(Sign::Severe).unwrap();

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Sign::Severe, Sign::Warning, Sign::Info, Sign::Debug, Sign::Severe]
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(Sign::Severe < Sign::Debug);
    }
}
