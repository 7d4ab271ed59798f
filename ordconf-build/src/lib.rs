//! Code generator for the ordered configuration pattern.
//!
//! This crate renders a self-contained `configuration.rs` module for one
//! configurable type: a `Config` trait for prioritised steps, constructors for
//! those steps, and a `Configurator` that runs them in priority order against
//! the target.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     ordconf_build::generate_configuration()
//!         .package("widget")
//!         .configurable("Widget")
//!         .pointer(true)
//!         .document(true)
//!         .output_dir("src/widget")
//!         .run()
//!         .expect("Failed to generate configuration module");
//!
//!     println!("cargo:rerun-if-changed=build.rs");
//! }
//! ```

mod error;
mod generator;
mod template;

pub use error::GenerateError;
pub use generator::{Generated, ModuleGenerator};
pub use template::{RenderOptions, render_file, render_items};

/// Create a new module generator with default settings.
///
/// Defaults mirror the command-line tool: package `main`, configurable `Item`,
/// passed by value, no documentation, written to `./configuration.rs`.
pub fn generate_configuration() -> ModuleGenerator {
    ModuleGenerator::new()
}
