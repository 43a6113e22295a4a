use crate::core::ConfigProvider;
use crate::utils::error::{GreeterError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_one_of, validate_salutation, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub greeting: GreetingSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingSection {
    pub salutation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GreeterError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreeterError::TomlParse {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${GREETING_WORD})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| GreeterError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn salutation(&self) -> Option<&str> {
        self.greeting.salutation.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(salutation) = self.salutation() {
            validate_salutation("greeting.salutation", salutation)?;
        }

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn salutation(&self) -> &str {
        self.salutation()
            .unwrap_or(crate::core::greeter::DEFAULT_SALUTATION)
    }
}
