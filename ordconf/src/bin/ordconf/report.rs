use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, Color as CellColor, Table, presets};
use serde::Serialize;

/// How the outcome of a run is printed on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Status line plus a table of the render options
    #[default]
    Table,
    /// One JSON object, nothing else on stdout
    Json,
    /// `<path> written|unchanged (<n> bytes)`
    Compact,
}

/// Outcome of one generator run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub package: String,
    pub configurable: String,
    pub is_pointer: bool,
    pub document: bool,
    pub bytes: usize,
    pub written: bool,
}

impl GenerationReport {
    fn status(&self) -> &'static str {
        if self.written { "written" } else { "unchanged" }
    }

    fn step_argument(&self) -> String {
        if self.is_pointer {
            format!("&mut {}", self.configurable)
        } else {
            format!("{} (cloned)", self.configurable)
        }
    }

    pub fn to_compact(&self) -> String {
        format!("{} {} ({} bytes)", self.path.display(), self.status(), self.bytes)
    }

    pub fn to_table(&self, color: bool) -> Table {
        let mut table = Table::new();
        table.load_preset(if color {
            presets::UTF8_FULL_CONDENSED
        } else {
            presets::ASCII_FULL
        });

        let rows = [
            ("File", self.path.display().to_string()),
            ("Package", self.package.clone()),
            ("Step argument", self.step_argument()),
            ("Documented", self.document.to_string()),
            ("Size", format!("{} bytes", self.bytes)),
            ("Status", self.status().to_string()),
        ];
        for (key, value) in rows {
            let mut key_cell = Cell::new(key).add_attribute(Attribute::Bold);
            if color {
                key_cell = key_cell.fg(CellColor::Cyan);
            }
            table.add_row(vec![key_cell, Cell::new(value)]);
        }
        table
    }
}

/// Prints diagnostics, the final report and errors for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    pub format: ReportFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub color: bool,
}

impl Reporter {
    /// Progress note on stderr, shown with `--verbose`.
    pub fn detail(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{}", self.paint(&format!("→ {message}"), Color::BrightBlack));
        }
    }

    pub fn report(&self, report: &GenerationReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            ReportFormat::Compact => println!("{}", report.to_compact()),
            ReportFormat::Table => {
                let headline = if report.written {
                    self.paint(&format!("✓ Generated {}", report.path.display()), Color::Green)
                } else {
                    self.paint(&format!("• {} is up to date", report.path.display()), Color::Blue)
                };
                println!("{headline}");
                println!("{}", report.to_table(self.color));
            }
        }
        Ok(())
    }

    /// Errors are printed even with `--quiet`.
    pub fn failure(&self, err: &anyhow::Error) {
        eprintln!("{}", self.paint(&format!("✗ {err:#}"), Color::Red));
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
