//! Configuration steps: a priority paired with an action.

use std::fmt;

use crate::errors::StepResult;

/// Ordering key for steps. Lower runs first; any `i32` is allowed.
pub type Priority = i32;

/// Priority of the built-in steps every configuration starts with.
pub const BUILTIN_PRIORITY: Priority = 0;

/// Priority given to steps registered without an explicit one.
pub const DEFAULT_PRIORITY: Priority = 50;

/// Conventional priority for late-stage, opt-in extensions.
pub const LATE_PRIORITY: Priority = 100;

/// A boxed action run against the configurable target.
pub type Action<T> = Box<dyn Fn(&mut T) -> StepResult>;

/// Anything that can be ordered and applied to a target.
pub trait Step<T> {
    fn priority(&self) -> Priority;

    fn apply(&self, target: &mut T) -> StepResult;
}

/// The standard step: an action at a fixed priority.
pub struct ConfigStep<T> {
    priority: Priority,
    action: Action<T>,
}

impl<T> ConfigStep<T> {
    /// Wrap `action` at [`DEFAULT_PRIORITY`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut T) -> StepResult + 'static,
    {
        Self::with_priority(DEFAULT_PRIORITY, action)
    }

    /// Wrap `action` at an explicit priority.
    pub fn with_priority<F>(priority: Priority, action: F) -> Self
    where
        F: Fn(&mut T) -> StepResult + 'static,
    {
        Self {
            priority,
            action: Box::new(action),
        }
    }

    /// Wrap `action` at [`LATE_PRIORITY`].
    pub fn late<F>(action: F) -> Self
    where
        F: Fn(&mut T) -> StepResult + 'static,
    {
        Self::with_priority(LATE_PRIORITY, action)
    }

    pub(crate) fn from_action(action: Action<T>) -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            action,
        }
    }

    pub fn boxed(self) -> Box<dyn Step<T>>
    where
        T: 'static,
    {
        Box::new(self)
    }
}

impl<T> Step<T> for ConfigStep<T> {
    fn priority(&self) -> Priority {
        self.priority
    }

    fn apply(&self, target: &mut T) -> StepResult {
        (self.action)(target)
    }
}

impl<T> fmt::Debug for ConfigStep<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStep")
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
