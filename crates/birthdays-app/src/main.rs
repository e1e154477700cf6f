use std::io::Write;

use birthdays_app::cli::{Cli, run};
use birthdays_app::logging;
use birthdays_core::config::load_config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = logging::init()?;

    let mut settings = load_config()?;
    cli.apply_overrides(&mut settings);
    settings.validate()?;

    logging::apply_level(&filter_handle, &settings.logging.level);
    tracing::debug!(config = ?settings, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let result = run(&cli, &settings, &mut out);
    out.flush()?;
    result
}
