//! Aggregator that owns a target and runs its steps in priority order.

use std::fmt;

use crate::errors::{ConfigError, StepResult};
use crate::list::StepList;
use crate::step::{Action, BUILTIN_PRIORITY, ConfigStep, Step};

/// Owns a configurable target and the steps to run against it.
///
/// Every configuration starts with a no-op built-in step at
/// [`BUILTIN_PRIORITY`]. Steps may be added at any time; they are sorted
/// lazily when [`apply`](Self::apply) runs.
///
/// ```
/// use ordconf::{ConfigStep, Configuration};
///
/// #[derive(Default)]
/// struct Server {
///     port: u16,
///     name: String,
/// }
///
/// let mut configuration = Configuration::new(Server::default());
/// configuration.add_action(|server: &mut Server| {
///     server.name = format!("api-{}", server.port);
///     Ok(())
/// });
/// configuration.add_step(ConfigStep::with_priority(10, |server: &mut Server| {
///     server.port = 8080;
///     Ok(())
/// }));
///
/// configuration.apply()?;
/// assert!(configuration.has_completed());
/// assert_eq!(configuration.target().name, "api-8080");
/// # Ok::<(), ordconf::ConfigError>(())
/// ```
pub struct Configuration<T> {
    target: T,
    completed: bool,
    steps: StepList<T>,
}

impl<T: 'static> Configuration<T> {
    /// Create a configuration seeded only with the built-in steps.
    pub fn new(target: T) -> Self {
        Self::with_steps(target, Vec::new())
    }

    /// Create a configuration seeded with the built-ins followed by `initial`.
    pub fn with_steps<I>(target: T, initial: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Step<T>>>,
    {
        let mut steps = builtin_steps();
        steps.extend(initial);
        Self {
            target,
            completed: false,
            steps,
        }
    }

    /// Append steps. Sorting happens at the next [`apply`](Self::apply).
    pub fn add<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = Box<dyn Step<T>>>,
    {
        self.steps.extend(steps);
    }

    /// Append a single step.
    pub fn add_step<S>(&mut self, step: S)
    where
        S: Step<T> + 'static,
    {
        self.steps.push(Box::new(step));
    }

    /// Append boxed actions, each at the default priority.
    pub fn add_actions<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action<T>>,
    {
        self.steps
            .extend(actions.into_iter().map(|action| ConfigStep::from_action(action).boxed()));
    }

    /// Append one action at the default priority.
    pub fn add_action<F>(&mut self, action: F)
    where
        F: Fn(&mut T) -> StepResult + 'static,
    {
        self.add_step(ConfigStep::new(action));
    }

    /// Sort the steps and run each against the target.
    ///
    /// Stops at the first failing step and returns its error; later steps do
    /// not run and nothing is rolled back. Every call reruns the full list.
    /// Only a clean run marks the configuration completed, and a failing run
    /// never clears that mark.
    pub fn apply(&mut self) -> Result<(), ConfigError> {
        self.steps.sort();
        log::debug!("applying {} configuration steps", self.steps.len());

        for (position, step) in self.steps.iter().enumerate() {
            let priority = step.priority();
            log::trace!("running step {position} at priority {priority}");
            if let Err(source) = step.apply(&mut self.target) {
                log::debug!("step {position} at priority {priority} failed: {source}");
                return Err(ConfigError::StepFailed {
                    priority,
                    position,
                    source,
                });
            }
        }

        self.completed = true;
        log::debug!("configuration completed");
        Ok(())
    }
}

impl<T> Configuration<T> {
    /// Whether any [`apply`](Self::apply) call has finished without failure.
    pub fn has_completed(&self) -> bool {
        self.completed
    }

    /// Number of registered steps, built-ins included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &StepList<T> {
        &self.steps
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

impl<T: fmt::Debug> fmt::Debug for Configuration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("target", &self.target)
            .field("completed", &self.completed)
            .field("steps", &self.steps)
            .finish()
    }
}

fn builtin_steps<T: 'static>() -> StepList<T> {
    let mut steps = StepList::new();
    steps.push(ConfigStep::with_priority(BUILTIN_PRIORITY, builtin_configuration_example::<T>).boxed());
    steps
}

fn builtin_configuration_example<T>(_target: &mut T) -> StepResult {
    Ok(())
}
