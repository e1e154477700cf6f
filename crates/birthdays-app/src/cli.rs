use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use birthdays_core::config::Settings;
use birthdays_core::constants::PROGRAM_NAME;
use birthdays_service::{
    CsvReporter, FileSystemSource, ListOptions, Reporter, TextReporter, build_list,
};
use clap::{Parser, Subcommand};

use crate::logging::verbosity_level;

/// Generates a birthday list as csv or text (to stdout) from vcf files
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Abort on the first file or directory that cannot be read
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a birthday list as csv (to stdout) from vcf files
    Csv {
        /// vCard files or directories to scan recursively
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Omit the `name;month;day;year;error` header line
        #[arg(long)]
        no_header: bool,

        /// Column delimiter (default from config, `;`)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Generates a birthday list as text (to stdout) from vcf files
    Text {
        /// vCard files or directories to scan recursively
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Prints the version
    Version,
}

impl Cli {
    /// ## Summary
    /// Overrides loaded settings with the flags given on the command line.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(level) = verbosity_level(self.verbose) {
            settings.logging.level = level.to_string();
        }
        if self.strict {
            settings.input.strict = true;
        }
        if let Commands::Csv {
            no_header,
            delimiter,
            ..
        } = &self.command
        {
            if *no_header {
                settings.report.header = false;
            }
            if let Some(delimiter) = delimiter {
                settings.report.delimiter = delimiter.to_string();
            }
        }
    }
}

/// ## Summary
/// Executes the parsed command, writing the report to `out`.
///
/// ## Errors
/// Returns an error if writing fails, if strict mode hits an unreadable
/// input, or, after the report is written, if any input could not be read.
#[tracing::instrument(skip_all)]
pub fn run(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> anyhow::Result<()> {
    let (paths, reporter) = match &cli.command {
        Commands::Version => {
            writeln!(out, "{PROGRAM_NAME} v{}", env!("CARGO_PKG_VERSION"))?;
            return Ok(());
        }
        Commands::Csv { paths, .. } => {
            let reporter = CsvReporter::from_config(&settings.report)?;
            (paths, Box::new(reporter) as Box<dyn Reporter>)
        }
        Commands::Text { paths } => (paths, Box::new(TextReporter) as Box<dyn Reporter>),
    };

    let source = FileSystemSource::from(&settings.input);
    let list = build_list(&source, paths, ListOptions::from(&settings.input))?;

    tracing::info!(records = list.records.len(), "Rendering birthday list");
    reporter.render(&list.records, out)?;
    out.flush()?;

    if !list.is_complete() {
        for failure in &list.failures {
            tracing::error!(error = %failure, "Input skipped");
        }
        bail!("{} input(s) could not be read", list.failures.len());
    }

    Ok(())
}
