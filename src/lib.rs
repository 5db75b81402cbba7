//! Signal Vocabulary - precomputed signals and thin emitting instruments
//!
//! Say what happened, where it happened, and move on.
//!
//! # Core Types
//!
//! - **Category**: Closed enumeration with dense ordinals (one axis)
//! - **Signal**: Immutable (sign, dimension) pair
//! - **SignalMatrix**: Every signal of a vocabulary, built once, indexed by ordinals
//! - **Instrument**: Per-subject emitter bound to one sink
//! - **Composer**: Factory from sink to instrument
//!
//! # Architecture: Matrix / Instrument / Sink
//!
//! 1. **Matrix** - The substrate: one dense table per vocabulary, shared by all
//! 2. **Instruments** - One per observed subject, each owning its sink
//! 3. **Sinks** - Whatever receives the emissions (channel, closure, queue)
//!
//! Emitting is a multiply-add, a slice index, and one non-blocking send.
//! No allocation, no hashing, no locks. The matrix is frozen after
//! construction, so any number of threads can read it.
//!
//! Single-axis vocabularies skip the matrix and emit the sign itself.
//!
//! # Vocabularies
//!
//! | Module | Axes | Instrument |
//! |--------|------|------------|
//! | [`vocab::flows`] | sign x dimension | `Flow` |
//! | [`vocab::tasks`] | sign x dimension | `Task` |
//! | [`vocab::sensors`] | sign x dimension | `Sensor` |
//! | [`vocab::logs`] | sign | `Log` |
//! | [`vocab::cycles`] | sign | `Cycle` |
//! | [`vocab::stacks`] | sign | `Stack` |
//!
//! # Example: Flow Emission
//!
//! ```rust
//! use signal_vocabulary::vocab::flows::{Dimension, Flow, FlowSignal, Flows, Sign};
//! use signal_vocabulary::{ChannelSink, Vocabulary};
//! use std::sync::mpsc;
//!
//! // 1. A sink - here, a plain channel drained by someone else
//! let (tx, rx) = mpsc::channel::<&'static FlowSignal>();
//!
//! // 2. Compose an instrument around it
//! let flow = Flow::compose(ChannelSink::new(tx));
//!
//! // 3. Emit
//! flow.success(Dimension::Ingress).unwrap();
//! flow.fail(Dimension::Egress).unwrap();
//!
//! // The receiver gets the shared matrix cell, not a copy
//! let first = rx.recv().unwrap();
//! assert!(std::ptr::eq(first, Flows::matrix().get(Sign::Success, Dimension::Ingress)));
//!
//! let second = rx.recv().unwrap();
//! assert_eq!(second.sign(), Sign::Fail);
//! assert_eq!(second.dimension(), Dimension::Egress);
//! ```
//!
//! # Example: Subject Registry
//!
//! ```rust
//! use signal_vocabulary::vocab::logs::{Log, Sign};
//! use signal_vocabulary::{ChannelSink, Registry, RegistryConfig};
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel::<Sign>();
//! let registry = Registry::new(RegistryConfig::default(), Log::compose, move |_| {
//!     ChannelSink::new(tx.clone())
//! })
//! .unwrap();
//!
//! registry.get("db.pool").unwrap().warning().unwrap();
//! registry.get("db.pool").unwrap().severe().unwrap();
//!
//! assert_eq!(registry.len(), 1);
//! assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Sign::Warning, Sign::Severe]);
//! ```

mod category;
mod composer;
mod config;
mod error;
mod instrument;
mod matrix;
mod registry;
mod signal;
mod sink;
pub mod vocab;

pub use category::Category;
pub use composer::{Composer, Vocabulary};
pub use config::RegistryConfig;
pub use error::{Result, SinkError, VocabError};
pub use instrument::{Instrument, SignInstrument};
pub use matrix::SignalMatrix;
pub use registry::{Registry, Subject};
pub use signal::Signal;
pub use sink::{ChannelSink, FnSink, Sink, TracedSink};
