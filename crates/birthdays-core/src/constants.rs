/// Program name as printed by the `version` command.
pub const PROGRAM_NAME: &str = "vcard-birthdays";

/// Prefix for environment variable overrides (`BIRTHDAYS_LOGGING_LEVEL`, ...).
pub const ENV_PREFIX: &str = "BIRTHDAYS";

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE_STEM: &str = "birthdays";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(CONFIG_FILE_STEM, ".toml");

/// Column header of the delimited report, joined with the configured delimiter.
pub const CSV_COLUMNS: [&str; 5] = ["name", "month", "day", "year", "error"];
