pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::domain::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "address-book")]
#[command(about = "Keep contacts, phone numbers and birthdays from the command line")]
pub struct CliConfig {
    /// Where the address book is kept between sessions
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// How many days ahead `birthdays` looks
    #[arg(long)]
    pub birthday_window: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: String,
    pub birthday_window_days: u32,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let data_file = cli
            .data_file
            .clone()
            .or_else(|| file.and_then(|f| f.data_file().map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let birthday_window_days = cli
            .birthday_window
            .or_else(|| file.and_then(TomlConfig::window_days))
            .unwrap_or(DEFAULT_BIRTHDAY_WINDOW_DAYS);

        Self {
            data_file,
            birthday_window_days,
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
            verbose: cli.verbose,
        }
    }

    /// Reads the config file named on the command line, if any, then resolves.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        if let Some(file) = &file {
            file.validate()?;
        }
        let settings = Self::resolve(cli, file.as_ref());
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)?;
        validate_range(
            "birthday_window",
            self.birthday_window_days,
            1,
            MAX_BIRTHDAY_WINDOW_DAYS,
        )
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn birthday_window_days(&self) -> u32 {
        self.birthday_window_days
    }
}
