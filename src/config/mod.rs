pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::settings::SettingsOverrides;
#[cfg(feature = "cli")]
use crate::core::batch::InputMode;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "greeter")]
#[command(about = "Asks for your name and greets you")]
pub struct CliConfig {
    /// Greet this name instead of prompting on stdin
    #[arg(long)]
    pub name: Option<String>,

    /// Salutation word, e.g. "Hello" or "Hi"
    #[arg(long, env = "GREETER_SALUTATION")]
    pub salutation: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat the input as a JSON value instead of plain text
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn input_mode(&self) -> InputMode {
        if self.json {
            InputMode::Json
        } else {
            InputMode::Text
        }
    }

    pub fn overrides(&self) -> SettingsOverrides<'_> {
        SettingsOverrides {
            salutation: self.salutation.as_deref(),
            config_path: self.config.as_deref(),
            log_format: self.log_format,
            verbose: self.verbose,
        }
    }
}
