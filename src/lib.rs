pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::stdin::{FixedSource, PromptSource};
pub use crate::config::settings::{GreetingSettings, SettingsOverrides};
pub use crate::core::{
    engine::GreetEngine,
    greeter::{capitalize, greet, Greeter},
};
pub use crate::domain::model::{InputKind, NameInput};
pub use crate::utils::error::{GreeterError, Result};
