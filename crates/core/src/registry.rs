//! Submission intake and the per-session log of accepted records

use crate::factory::ItemFactory;
use crate::item::ItemKind;
use crate::submission::RawSubmission;
use serde::Serialize;
use shelf_validation::ValidationErrors;
use thiserror::Error;

/// Formatted records accepted during one session, oldest first.
///
/// Only [`Registry`] can add to it and nothing can remove from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionLog {
    entries: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn append(&mut self, entry: String) -> &str {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }
}

/// Why a submission was not added to the log
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("unknown item kind '{0}'")]
    UnknownKind(String),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Rejection {
    /// Machine-readable reasons, for logs
    pub fn codes(&self) -> Vec<&str> {
        match self {
            Rejection::UnknownKind(_) => vec!["unknown_kind"],
            Rejection::Invalid(errors) => errors.codes(),
        }
    }
}

/// Routes a submission to the rules for its kind and records the result
#[derive(Debug, Clone, Default)]
pub struct Registry {
    factory: ItemFactory,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_factory(factory: ItemFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    /// Append the formatted record for `raw` to `log`.
    ///
    /// Returns `false` and leaves `log` untouched when `kind` is unknown or
    /// any field fails validation. The caller gets no further detail.
    pub fn submit(&self, kind: &str, raw: &RawSubmission, log: &mut SessionLog) -> bool {
        self.register(kind, raw, log).is_ok()
    }

    /// Same as [`submit`](Self::submit) but says why a submission was
    /// refused. On success returns the entry that was appended.
    pub fn register<'a>(
        &self,
        kind: &str,
        raw: &RawSubmission,
        log: &'a mut SessionLog,
    ) -> Result<&'a str, Rejection> {
        let result = kind
            .parse::<ItemKind>()
            .map_err(|e| Rejection::UnknownKind(e.0))
            .and_then(|kind| self.factory.try_create(kind, raw).map_err(Rejection::from));

        match result {
            Ok(record) => {
                tracing::debug!(kind = %record.kind(), entries = log.len() + 1, "resource registered");
                Ok(log.append(record.summary()))
            }
            Err(rejection) => {
                tracing::debug!(kind, reasons = ?rejection.codes(), "submission rejected");
                Err(rejection)
            }
        }
    }
}
