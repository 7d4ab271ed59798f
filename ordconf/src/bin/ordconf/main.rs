mod context;
mod generate;
mod report;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;

use generate::{GenerateArgs, handle_generate};
use report::{ReportFormat, Reporter};

const AFTER_LONG_HELP: &str = "\
Examples:
  ordconf                                          ./configuration.rs for `Item` in `main`
  ordconf --package widget --configurable Widget   steps receive a clone of Widget
  ordconf --configurable Widget --is-pointer       steps receive &mut Widget
  ordconf --document --output-dir src/widget       documented module under src/widget
  ordconf --stdout                                 print the module, write nothing

Environment variables:
  ORDCONF_PACKAGE        package name when --package is not given
  ORDCONF_CONFIGURABLE   configurable name when --configurable is not given
  RUST_LOG               log filter, e.g. ordconf_build=debug
";

fn help_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
}

/// Generate a priority-ordered configuration module
#[derive(Parser)]
#[command(name = "ordconf", version, styles = help_styles(), after_long_help = AFTER_LONG_HELP)]
#[command(long_about = "\
Writes a configuration.rs module for one configurable type. The module defines
Config steps (an order plus a function), a Configurator that runs them lowest
order first, and a built-in step at order 0.

Options come from flags, then ORDCONF_* variables, then ./ordconf.toml.")]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    output: ReportFormat,

    /// Print errors only
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print progress notes and enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }
    let reporter = Reporter {
        format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        color: !cli.no_color && colored::control::SHOULD_COLORIZE.should_colorize(),
    };

    if let Err(err) = handle_generate(cli.generate, &reporter) {
        reporter.failure(&err);
        std::process::exit(1);
    }
}
