//! Subject registry - one instrument per named subject
//!
//! The registry owns a composer and a sink factory. The first lookup of a
//! subject builds its sink and composes its instrument; later lookups return
//! the cached `Arc`. Composition happens under the write lock, so a subject
//! is composed at most once even when first requested from several threads.

use crate::composer::Composer;
use crate::config::RegistryConfig;
use crate::error::{Result, VocabError};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Validated hierarchical subject name, e.g. `db.pool.checkout`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject {
    name: String,
    separator: char,
}

impl Subject {
    /// Parse a name split on `.`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::parse_with(name, '.')
    }

    /// Parse a name split on `separator`.
    pub fn parse_with(name: &str, separator: char) -> Result<Self> {
        let invalid = |reason| VocabError::InvalidSubject {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if name.split(separator).any(str::is_empty) {
            return Err(invalid("empty segment"));
        }

        Ok(Self {
            name: name.to_string(),
            separator,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split(self.separator)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Final segment.
    pub fn leaf(&self) -> &str {
        self.name
            .rsplit(self.separator)
            .next()
            .unwrap_or(&self.name)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

type SinkFactory<K> = Box<dyn Fn(&Subject) -> K + Send + Sync>;

/// Lazily composed, cached instruments keyed by subject.
pub struct Registry<K, I> {
    config: RegistryConfig,
    composer: fn(K) -> I,
    sinks: SinkFactory<K>,
    instruments: RwLock<HashMap<Subject, Arc<I>>>,
}

impl<K, I> Registry<K, I> {
    /// Create a registry. Fails if `config` does not validate.
    pub fn new<F>(config: RegistryConfig, composer: fn(K) -> I, sinks: F) -> Result<Self>
    where
        F: Fn(&Subject) -> K + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            composer,
            sinks: Box::new(sinks),
            instruments: RwLock::new(HashMap::new()),
        })
    }

    /// Instrument for `name`, composing it on first request.
    ///
    /// The sink factory and composer run under the registry's write lock so
    /// each subject is composed exactly once. They must not call back into
    /// this registry (that deadlocks) and should be cheap, since lookups of
    /// other subjects wait on them.
    pub fn get(&self, name: &str) -> Result<Arc<I>> {
        let subject = Subject::parse_with(name, self.config.separator)?;

        if let Some(found) = self
            .instruments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&subject)
        {
            return Ok(Arc::clone(found));
        }

        let mut instruments = self
            .instruments
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Another thread may have composed it between the two locks
        if let Some(found) = instruments.get(&subject) {
            return Ok(Arc::clone(found));
        }

        if let Some(max) = self.config.max_subjects {
            if instruments.len() >= max {
                tracing::warn!(subject = %subject, max, "registry full");
                return Err(VocabError::RegistryFull(max));
            }
        }

        let sink = (self.sinks)(&subject);
        let instrument = Arc::new(self.composer.compose(sink));
        tracing::debug!(subject = %subject, "instrument composed");
        instruments.insert(subject, Arc::clone(&instrument));
        Ok(instrument)
    }

    pub fn contains(&self, name: &str) -> bool {
        Subject::parse_with(name, self.config.separator)
            .map(|subject| {
                self.instruments
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .contains_key(&subject)
            })
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.instruments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered subjects, sorted.
    pub fn subjects(&self) -> Vec<Subject> {
        let mut subjects: Vec<_> = self
            .instruments
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        subjects.sort();
        subjects
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl<K, I> fmt::Debug for Registry<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("subjects", &self.len())
            .finish_non_exhaustive()
    }
}
