use std::borrow::Cow;
use std::error::Error as StdError;

use thiserror::Error;

use crate::step::Priority;

/// Failure reported by a single configuration action.
#[derive(Debug, Error)]
pub enum StepError {
    /// The action rejected the target with a message.
    #[error("{message}")]
    Failed { message: Cow<'static, str> },

    /// The action surfaced an underlying error.
    #[error("{0}")]
    Source(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl StepError {
    /// Convenience helper for failing a step with a plain message.
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Wrap any error raised while configuring the target.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Source(Box::new(error))
    }
}

/// Error returned by [`Configuration::apply`](crate::Configuration::apply).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A step failed; no later step ran.
    #[error("configuration step {position} (priority {priority}) failed: {source}")]
    StepFailed {
        /// Priority of the failing step.
        priority: Priority,
        /// Index of the failing step in sorted order, built-ins included.
        position: usize,
        #[source]
        source: StepError,
    },
}

impl ConfigError {
    /// Priority of the step that stopped the run.
    pub fn priority(&self) -> Priority {
        match self {
            Self::StepFailed { priority, .. } => *priority,
        }
    }
}

/// Convenience alias for action results.
pub type StepResult = Result<(), StepError>;
