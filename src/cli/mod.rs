//! Command-line interface for trendscrape
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Applying argument overrides on top of the loaded configuration

pub mod completion;

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::input;

/// Collects the latest uploads of trending channels into per-country CSV files
#[derive(Parser, Debug)]
#[command(
    name = "trendscrape",
    version,
    about = "Collect recent uploads of trending channels from the YouTube Data API",
    long_about = "Reads the channel IDs of each country's trending snapshot, fetches the most
recent uploads of every channel from the YouTube Data API and writes one CSV file per country."
)]
pub struct CliArgs {
    /// Path to the file containing the API key
    #[arg(long = "key_path", visible_alias = "key-path", value_name = "FILE")]
    pub key_path: Option<PathBuf>,

    /// Path to the file containing the list of country codes to scrape
    #[arg(
        long = "country_code_path",
        visible_alias = "country-code-path",
        value_name = "FILE"
    )]
    pub country_code_path: Option<PathBuf>,

    /// Directory to save the output files in
    #[arg(long = "output_dir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding the trending snapshots
    #[arg(long = "trending_dir", visible_alias = "trending-dir", value_name = "DIR")]
    pub trending_dir: Option<PathBuf>,

    /// Snapshot date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Number of recent uploads fetched per channel (1-50)
    #[arg(long, value_name = "N")]
    pub max_results: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Quiet mode (errors only, no progress or summary)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for trendscrape
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Effective configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// Arguments are applied last, then the result is validated.
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;
        Self::apply_args_to_config(&mut config, args);
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Snapshot date from `--date`, or today
    pub fn snapshot_date(&self) -> Result<NaiveDate> {
        match &self.args.date {
            Some(date) => input::parse_snapshot_date(date),
            None => Ok(input::today()),
        }
    }

    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        self.config.output.progress && !self.args.quiet
    }

    /// Whether the summary table should be printed
    pub fn show_summary(&self) -> bool {
        self.config.output.summary && !self.args.quiet
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_input_args(config, args);
        Self::apply_api_args(config, args);
        Self::apply_output_args(config, args);
        Self::apply_logging_args(config, args);
    }

    fn apply_input_args(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.key_path {
            config.input.key_path = path.clone();
        }
        if let Some(path) = &args.country_code_path {
            config.input.country_code_path = path.clone();
        }
        if let Some(dir) = &args.trending_dir {
            config.input.trending_dir = dir.clone();
        }
    }

    fn apply_api_args(config: &mut Config, args: &CliArgs) {
        if let Some(max_results) = args.max_results {
            config.api.max_results = max_results;
        }
        if let Some(timeout) = args.timeout {
            config.api.timeout = timeout;
        }
    }

    fn apply_output_args(config: &mut Config, args: &CliArgs) {
        if let Some(dir) = &args.output_dir {
            config.output.output_dir = dir.clone();
        }
        if args.no_progress {
            config.output.progress = false;
        }
    }

    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("trendscrape version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return;
        }

        match Config::load_from_file(Some(&path)) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("# Configuration file: {}", self.config_path().display());
        print!("{}", self.config.to_toml_string()?);
        Ok(())
    }

    /// Configuration file in use (explicit or default location)
    pub fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .as_deref()
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    fn with_empty_config(extra: Vec<&str>) -> (CliInterface, tempfile::NamedTempFile) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let mut args = vec!["trendscrape", "--config", path.as_str()];
        args.extend(extra);
        let cli = CliInterface::from_args(parse(&args)).unwrap();
        (cli, file)
    }

    #[test]
    fn test_underscore_flags() {
        let args = parse(&[
            "trendscrape",
            "--key_path",
            "secret.txt",
            "--country_code_path",
            "codes.txt",
            "--output_dir",
            "out",
        ]);
        assert_eq!(args.key_path, Some(PathBuf::from("secret.txt")));
        assert_eq!(args.country_code_path, Some(PathBuf::from("codes.txt")));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_dashed_aliases() {
        let args = parse(&["trendscrape", "--key-path", "k", "--output-dir", "o"]);
        assert_eq!(args.key_path, Some(PathBuf::from("k")));
        assert_eq!(args.output_dir, Some(PathBuf::from("o")));
    }

    #[test]
    fn test_defaults_without_flags() {
        let (cli, _file) = with_empty_config(vec![]);
        assert_eq!(cli.config().input.key_path, PathBuf::from("api_key.txt"));
        assert_eq!(cli.config().output.output_dir, PathBuf::from("output/"));
        assert!(cli.show_progress());
    }

    #[test]
    fn test_args_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nmax_results = 20\n[output]\noutput_dir = \"from_file\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliInterface::from_args(parse(&[
            "trendscrape",
            "-c",
            &path,
            "--output_dir",
            "from_args",
            "-v",
        ]))
        .unwrap();

        assert_eq!(cli.config().api.max_results, 20);
        assert_eq!(cli.config().output.output_dir, PathBuf::from("from_args"));
        assert_eq!(cli.config().logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let result = CliInterface::from_args(parse(&[
            "trendscrape",
            "-c",
            &path,
            "--max-results",
            "500",
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_disables_progress_and_summary() {
        let (cli, _file) = with_empty_config(vec!["-q"]);
        assert!(!cli.show_progress());
        assert!(!cli.show_summary());
        assert_eq!(cli.config().logging.level, LogLevel::Error);
    }

    #[test]
    fn test_snapshot_date() {
        let (cli, _file) = with_empty_config(vec!["--date", "2022-12-31"]);
        assert_eq!(cli.snapshot_date().unwrap().to_string(), "2022-12-31");

        let (cli, _file) = with_empty_config(vec!["--date", "yesterday"]);
        assert!(cli.snapshot_date().is_err());
    }

    #[test]
    fn test_subcommand_parsing() {
        let args = parse(&["trendscrape", "completion", "zsh"]);
        assert!(matches!(args.command, Some(Commands::Completion { ref shell }) if shell == "zsh"));
    }
}
