//! Stacks - push/pop activity and bound violations

use crate::error::SinkError;
use crate::instrument::SignInstrument;
use crate::sink::Sink;

crate::category! {
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Sign {
        Push,
        Pop,
        /// Push against a full stack
        Overflow,
        /// Pop from an empty stack
        Underflow,
    }
}

#[derive(Debug)]
pub struct Stack<K> {
    instrument: SignInstrument<Sign, K>,
}

impl<K: Sink<Sign>> Stack<K> {
    pub fn compose(sink: K) -> Self {
        Self {
            instrument: SignInstrument::new(sink),
        }
    }

    #[inline]
    pub fn sign(&self, sign: Sign) -> Result<(), SinkError> {
        self.instrument.sign(sign)
    }

    pub fn push(&self) -> Result<(), SinkError> {
        self.sign(Sign::Push)
    }

    pub fn pop(&self) -> Result<(), SinkError> {
        self.sign(Sign::Pop)
    }

    pub fn overflow(&self) -> Result<(), SinkError> {
        self.sign(Sign::Overflow)
    }

    pub fn underflow(&self) -> Result<(), SinkError> {
        self.sign(Sign::Underflow)
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
    fn test_stack_signs() {
        let (tx, rx) = mpsc::channel();
        let stack = Stack::compose(ChannelSink::new(tx));

        stack.push().unwrap();
        stack.pop().unwrap();
        stack.overflow().unwrap();
        stack.underflow().unwrap();

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![Sign::Push, Sign::Pop, Sign::Overflow, Sign::Underflow]
        );
    }

    #[test]
    fn test_closed_sink() {
        let (tx, rx) = mpsc::channel();
        let stack = Stack::compose(ChannelSink::new(tx));
        drop(rx);
        assert_eq!(stack.push(), Err(SinkError::Closed));
    }
}
