//! Pipeline configuration and CLI argument handling
//!
//! Configuration can come from a JSON file, CLI arguments, or both; CLI
//! arguments override file settings. Validation happens eagerly so an
//! unknown time zone is reported before any records are read.

use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::str::FromStr;
use tracing::{debug, info};

/// Default IANA zone used when none is configured (the deployment the
/// original records come from runs on Paris time)
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Output format for the partitioned schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON document with `upcoming` and `past` arrays
    #[default]
    Json,
    /// Human-readable listing with per-bucket headers and counts
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(ConfigError::InvalidOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Command line arguments for the schedule pipeline
#[derive(Debug, Clone, Parser)]
#[command(
    name = "formation-schedule",
    about = "Partitions training sessions into upcoming and past schedules",
    long_about = "Reads a batch of formation records, normalizes their raw date fields \
                  into canonical YYYY-MM-DD form, and partitions them into upcoming and \
                  past buckets relative to today in the configured time zone."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Input file containing formation records
    #[arg(
        short,
        long,
        help = "Input JSON file with formation records",
        long_help = "Path to a JSON file holding either an array of formation records or a \
                     catalog document with 'structures' and 'formations' arrays. Reads stdin \
                     when omitted."
    )]
    pub input: Option<String>,

    /// IANA time zone used to derive "today"
    #[arg(
        long,
        help = "IANA time zone name (e.g. Europe/Paris)",
        long_help = "Time zone in which 'today' is computed for the upcoming/past split. \
                     Default: Europe/Paris"
    )]
    pub timezone: Option<String>,

    /// Fixed "today" date overriding the clock (YYYY-MM-DD)
    #[arg(
        long,
        help = "Fixed 'today' date (YYYY-MM-DD)",
        long_help = "Overrides the wall clock with a fixed reference date, making runs \
                     deterministic. Useful for replaying historical batches and for testing."
    )]
    pub today: Option<NaiveDate>,

    /// Output format for the partitioned schedule
    #[arg(
        long,
        help = "Output format (json or text)",
        long_help = "Output format for the partitioned schedule. Supported formats: json, text. \
                     Default: json"
    )]
    pub output_format: Option<String>,

    /// Emit a normalization trace for every record
    #[arg(long, help = "Emit per-record normalization diagnostics")]
    pub diagnostics: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Validate configuration without running the pipeline
    #[arg(long, help = "Validate configuration without running the pipeline")]
    pub dry_run: bool,

    /// Print default configuration in JSON format and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// IANA time zone in which "today" is derived
    pub timezone: String,
    /// Fixed "today" override; `None` means read the clock once per run
    pub today: Option<NaiveDate>,
    /// Whether to attach the tracing diagnostic sink to the normalizer
    pub diagnostics: bool,
    /// Output format for the partitioned schedule
    pub output_format: OutputFormat,
    /// Input file path; `None` means stdin
    pub input: Option<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            today: None,
            diagnostics: false,
            output_format: OutputFormat::default(),
            input: None,
        }
    }
}

impl ScheduleConfig {
    /// Build a configuration from CLI arguments, merging an optional config file
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = &args.config {
            info!("Loading configuration from file: {}", path);
            Self::from_file(path)?
        } else {
            Self::default()
        };

        Self::apply_cli_overrides(&mut config, args)?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::FileParse {
            path: path.to_string(),
            source,
        })
    }

    /// Apply CLI argument overrides on top of a base configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(timezone) = args.timezone {
            config.timezone = timezone;
        }
        if let Some(today) = args.today {
            config.today = Some(today);
        }
        if let Some(format) = args.output_format {
            config.output_format = format.parse()?;
        }
        if args.diagnostics {
            config.diagnostics = true;
        }
        if let Some(input) = args.input {
            config.input = Some(input);
        }
        Ok(())
    }

    /// Validate the configuration, resolving the time zone eagerly
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zone()?;
        Ok(())
    }

    /// Resolve the configured IANA zone name
    pub fn zone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))
    }

    /// Serialize the configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    FileRead {
        /// Path that failed to read
        path: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The configuration file was not valid JSON
    #[error("Failed to parse configuration file '{path}': {source}")]
    FileParse {
        /// Path that failed to parse
        path: String,
        /// Underlying JSON failure
        source: serde_json::Error,
    },

    /// The configured time zone is not a known IANA name
    #[error("Unknown time zone '{0}'")]
    UnknownTimezone(String),

    /// The requested output format is not supported
    #[error("Invalid output format '{0}' (expected 'json' or 'text')")]
    InvalidOutputFormat(String),
}
