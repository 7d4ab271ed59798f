//! Builder that renders a configuration module and writes it to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::template::{RenderOptions, render_file};

/// Outcome of a generator run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Where the module was (or would have been) written.
    pub path: PathBuf,
    /// The formatted source.
    pub source: String,
    /// False when the file already held identical content.
    pub written: bool,
}

/// Builder for configuring and running the configuration module generator.
#[derive(Debug, Clone)]
pub struct ModuleGenerator {
    options: RenderOptions,
    output_dir: PathBuf,
    file_name: String,
}

impl ModuleGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            output_dir: PathBuf::from("."),
            file_name: "configuration.rs".to_string(),
        }
    }

    /// Replace all render options at once.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the name of the module that will contain the generated file.
    ///
    /// Default: `main`
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.options.package = name.into();
        self
    }

    /// Set the name of the type the configuration steps act on.
    ///
    /// Default: `Item`
    pub fn configurable(mut self, name: impl Into<String>) -> Self {
        self.options.configurable = name.into();
        self
    }

    /// Pass the target to steps as `&mut` rather than by value.
    pub fn pointer(mut self, is_pointer: bool) -> Self {
        self.options.is_pointer = is_pointer;
        self
    }

    /// Emit doc comments in the generated module.
    pub fn document(mut self, document: bool) -> Self {
        self.options.document = document;
        self
    }

    /// Set the directory the module is written into.
    ///
    /// Default: the current directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the file name of the generated module.
    ///
    /// Default: `configuration.rs`
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    /// Full path of the file `run` writes.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Render and format the module without touching the filesystem.
    pub fn render(&self) -> Result<String, GenerateError> {
        render_file(&self.options)
    }

    /// Run the generator.
    ///
    /// Renders the module and writes it to [`output_path`](Self::output_path),
    /// skipping the write when the file already holds the same content.
    pub fn run(self) -> Result<Generated, GenerateError> {
        let source = self.render()?;
        let path = self.output_path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let written = write_if_changed(&path, &source)?;
        if written {
            log::info!("generated {} for {}", path.display(), self.options.configurable);
        } else {
            log::debug!("{} is up to date", path.display());
        }

        Ok(Generated { path, source, written })
    }
}

impl Default for ModuleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Only write if content has changed (avoids unnecessary recompilation).
fn write_if_changed(path: &Path, content: &str) -> Result<bool, GenerateError> {
    let should_write = match fs::read_to_string(path) {
        Ok(existing) => existing != content,
        Err(_) => true,
    };

    if should_write {
        fs::write(path, content).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(should_write)
}
