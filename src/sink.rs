//! Sinks - where emitted values go
//!
//! A sink accepts a value without blocking the caller. Whatever it does
//! after that (queue, fan out, drop) is its own business, and so is failure:
//! instruments hand a [`SinkError`] back exactly as the sink produced it.

use crate::error::SinkError;
use std::fmt::{self, Debug};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Receiver of emitted values
pub trait Sink<T>: Send + Sync {
    /// Accept one value. Must not block.
    fn send(&self, value: T) -> Result<(), SinkError>;
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for Arc<K> {
    #[inline]
    fn send(&self, value: T) -> Result<(), SinkError> {
        (**self).send(value)
    }
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for Box<K> {
    #[inline]
    fn send(&self, value: T) -> Result<(), SinkError> {
        (**self).send(value)
    }
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for &K {
    #[inline]
    fn send(&self, value: T) -> Result<(), SinkError> {
        (**self).send(value)
    }
}

/// Function-based sink for simple cases
pub struct FnSink<F>(pub F);

impl<T, F: Fn(T) + Send + Sync> Sink<T> for FnSink<F> {
    #[inline]
    fn send(&self, value: T) -> Result<(), SinkError> {
        (self.0)(value);
        Ok(())
    }
}

/// Channel-based sink - forwards values to an mpsc channel
pub struct ChannelSink<T> {
    sender: Sender<T>,
}

impl<T> ChannelSink<T> {
    pub fn new(sender: Sender<T>) -> Self {
        Self { sender }
    }
}

impl<T> Clone for ChannelSink<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Send> Sink<T> for ChannelSink<T> {
    #[inline]
    fn send(&self, value: T) -> Result<(), SinkError> {
        self.sender.send(value).map_err(|_| SinkError::Closed)
    }
}

/// Decorator that logs every value at `trace` level before forwarding.
pub struct TracedSink<K> {
    subject: String,
    inner: K,
}

impl<K> TracedSink<K> {
    pub fn new(subject: impl Into<String>, inner: K) -> Self {
        Self {
            subject: subject.into(),
            inner,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn inner(&self) -> &K {
        &self.inner
    }
}

impl<T: Debug, K: Sink<T>> Sink<T> for TracedSink<K> {
    fn send(&self, value: T) -> Result<(), SinkError> {
        tracing::trace!(subject = %self.subject, value = ?value, "emit");
        self.inner.send(value).inspect_err(|err| {
            tracing::warn!(subject = %self.subject, error = %err, "sink refused emission");
        })
    }
}

impl<K> Debug for TracedSink<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedSink")
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    #[test]
    fn test_fn_sink() {
        let count = AtomicUsize::new(0);
        let sink = FnSink(|n: usize| {
            count.fetch_add(n, Ordering::Relaxed);
        });
        sink.send(2).unwrap();
        sink.send(3).unwrap();
        assert_eq!(count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_channel_sink_preserves_order() {
        let (tx, rx) = mpsc::channel();
        let sink = ChannelSink::new(tx);
        for i in 0..4 {
            sink.send(i).unwrap();
        }
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_channel_sink_closed() {
        let (tx, rx) = mpsc::channel::<u8>();
        let sink = ChannelSink::new(tx);
        drop(rx);
        assert_eq!(sink.send(1), Err(SinkError::Closed));
    }

    #[test]
    fn test_traced_sink_passes_errors_through() {
        struct Refuse;
        impl Sink<u8> for Refuse {
            fn send(&self, _: u8) -> Result<(), SinkError> {
                Err(SinkError::Rejected("full".into()))
            }
        }

        let sink = TracedSink::new("db.pool", Refuse);
        assert_eq!(sink.subject(), "db.pool");
        assert_eq!(sink.send(7), Err(SinkError::Rejected("full".into())));
    }

    #[test]
    fn test_traced_sink_forwards_value() {
        let (tx, rx) = mpsc::channel();
        let sink = TracedSink::new("db.pool", ChannelSink::new(tx));
        sink.send(41u8).unwrap();
        sink.send(42u8).unwrap();
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![41, 42]);
    }

    #[test]
    fn test_shared_and_boxed() {
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(ChannelSink::new(tx));
        let boxed: Box<dyn Sink<u8>> = Box::new(Arc::clone(&shared));
        shared.send(1).unwrap();
        boxed.send(2).unwrap();
        (&*shared).send(3).unwrap();
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
