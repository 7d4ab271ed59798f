//! Priority-ordered configuration steps.
//!
//! A [`Configuration`] owns a target value and a list of steps. Each step pairs
//! a [`Priority`] with an action; [`Configuration::apply`] runs them lowest
//! priority first, keeping registration order among equal priorities, and
//! stops at the first failure.
//!
//! The same pattern can be generated as a standalone module for a concrete
//! type, either inline with [`ordered_configuration!`] or on disk with the
//! `ordconf` command-line tool (backed by the `ordconf-build` crate).

pub mod configuration;
pub mod errors;
pub mod list;
pub mod step;

pub use configuration::Configuration;
pub use errors::*;
pub use list::StepList;
pub use ordconf_macros::ordered_configuration;
pub use step::{Action, BUILTIN_PRIORITY, ConfigStep, DEFAULT_PRIORITY, LATE_PRIORITY, Priority, Step};
