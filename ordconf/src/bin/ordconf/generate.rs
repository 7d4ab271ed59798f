use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ordconf_build::{ModuleGenerator, RenderOptions};

use crate::context::ProjectContext;
use crate::report::{GenerationReport, Reporter};

/// Template parameters and output location
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Set the package (enclosing module) name [default: main]
    #[arg(long, env = "ORDCONF_PACKAGE")]
    pub package: Option<String>,

    /// Set the configurable item name [default: Item]
    #[arg(long, env = "ORDCONF_CONFIGURABLE")]
    pub configurable: Option<String>,

    /// Configurable is passed to steps by mutable reference
    #[arg(long = "is-pointer", alias = "isPointer")]
    pub is_pointer: bool,

    /// Generate documentation on public functions, types, and traits
    #[arg(long)]
    pub document: bool,

    /// Directory to write into [default: current directory]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Name of the generated file [default: configuration.rs]
    #[arg(long)]
    pub file_name: Option<String>,

    /// Print the generated module to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Config file to read [default: ./ordconf.toml if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Merge flags, environment, config file and defaults into one generator.
pub fn build_generator(args: &GenerateArgs, context: &ProjectContext) -> ModuleGenerator {
    let settings = &context.config.generate;
    let options = RenderOptions {
        package: args.package.clone().unwrap_or_else(|| settings.package.clone()),
        configurable: args
            .configurable
            .clone()
            .unwrap_or_else(|| settings.configurable.clone()),
        is_pointer: args.is_pointer || settings.is_pointer,
        document: args.document || settings.document,
    };

    ModuleGenerator::new()
        .options(options)
        .output_dir(context.output_dir(args.output_dir.as_deref()))
        .file_name(args.file_name.clone().unwrap_or_else(|| settings.file_name.clone()))
}

pub fn handle_generate(args: GenerateArgs, reporter: &Reporter) -> Result<()> {
    let context = ProjectContext::find(args.config.as_deref())?;
    if let Some(path) = &context.config_path {
        reporter.detail(&format!("Using config file {}", path.display()));
    }

    let generator = build_generator(&args, &context);
    let options = generator.render_options().clone();
    log::debug!("render options: {options:?}");

    if args.stdout {
        let source = generator.render()?;
        print!("{source}");
        return Ok(());
    }

    reporter.detail(&format!("Writing {}", generator.output_path().display()));
    let generated = generator
        .run()
        .with_context(|| format!("Failed to generate configuration for `{}`", options.configurable))?;

    let report = GenerationReport {
        bytes: generated.source.len(),
        path: generated.path,
        package: options.package,
        configurable: options.configurable,
        is_pointer: options.is_pointer,
        document: options.document,
        written: generated.written,
    };
    reporter.report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CONFIG_FILE;

    fn context_with(config: Option<&str>) -> (tempfile::TempDir, ProjectContext) {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = config {
            std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        }
        let context = ProjectContext::from_dir(dir.path().to_path_buf(), None).unwrap();
        (dir, context)
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let (dir, context) = context_with(None);
        let generator = build_generator(&GenerateArgs::default(), &context);

        assert_eq!(generator.render_options(), &RenderOptions::default());
        assert_eq!(generator.output_path(), dir.path().join("configuration.rs"));
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let (_dir, context) = context_with(Some(
            "[generate]\npackage = \"widget\"\nconfigurable = \"Widget\"\ndocument = true\n",
        ));
        let generator = build_generator(&GenerateArgs::default(), &context);

        let options = generator.render_options();
        assert_eq!(options.package, "widget");
        assert_eq!(options.configurable, "Widget");
        assert!(options.document);
        assert!(!options.is_pointer);
    }

    #[test]
    fn test_flags_override_config_file() {
        let (dir, context) = context_with(Some(
            "[generate]\nconfigurable = \"Widget\"\nfile_name = \"widget_config.rs\"\n",
        ));
        let args = GenerateArgs {
            configurable: Some("Gadget".to_string()),
            is_pointer: true,
            file_name: Some("gadget_config.rs".to_string()),
            ..Default::default()
        };
        let generator = build_generator(&args, &context);

        assert_eq!(generator.render_options().configurable, "Gadget");
        assert!(generator.render_options().is_pointer);
        assert_eq!(generator.output_path(), dir.path().join("gadget_config.rs"));
    }
}
