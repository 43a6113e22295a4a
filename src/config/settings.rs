use crate::config::toml_config::TomlConfig;
use crate::core::greeter::DEFAULT_SALUTATION;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, validate_salutation, Validate};
use std::path::Path;

/// 未指定 --config 時，若目前目錄有此檔案就載入
pub const DEFAULT_CONFIG_FILE: &str = "greeter.toml";

/// 命令列提供的覆蓋值
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides<'a> {
    pub salutation: Option<&'a str>,
    pub config_path: Option<&'a str>,
    pub log_format: Option<LogFormat>,
    pub verbose: bool,
}

/// Settings after merging flags, environment and the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingSettings {
    pub salutation: String,
    pub log_format: LogFormat,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            salutation: DEFAULT_SALUTATION.to_string(),
            log_format: LogFormat::default(),
            log_level: None,
            verbose: false,
        }
    }
}

impl GreetingSettings {
    pub fn resolve(overrides: &SettingsOverrides<'_>) -> Result<Self> {
        let file = Self::load_file(overrides.config_path)?;
        Self::merge(overrides, file)
    }

    fn load_file(config_path: Option<&str>) -> Result<Option<TomlConfig>> {
        match config_path {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path).map(Some)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                TomlConfig::from_file(DEFAULT_CONFIG_FILE).map(Some)
            }
            None => Ok(None),
        }
    }

    /// 優先順序：命令列/環境變數 > TOML > 預設值
    pub fn merge(overrides: &SettingsOverrides<'_>, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        file.validate()?;

        let settings = Self {
            salutation: overrides
                .salutation
                .or(file.salutation())
                .unwrap_or(DEFAULT_SALUTATION)
                .to_string(),
            log_format: overrides
                .log_format
                .or(file.log_format())
                .unwrap_or_default(),
            log_level: file.log_level().map(str::to_string),
            verbose: overrides.verbose,
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for GreetingSettings {
    fn validate(&self) -> Result<()> {
        validate_salutation("salutation", &self.salutation)
    }
}

impl ConfigProvider for GreetingSettings {
    fn salutation(&self) -> &str {
        &self.salutation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content: &str) -> Option<TomlConfig> {
        Some(TomlConfig::from_toml_str(content).unwrap())
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = GreetingSettings::merge(&SettingsOverrides::default(), None).unwrap();
        assert_eq!(settings, GreetingSettings::default());
        assert_eq!(settings.salutation, "Hello");
    }

    #[test]
    fn test_file_value_used_when_no_override() {
        let settings = GreetingSettings::merge(
            &SettingsOverrides::default(),
            file("[greeting]\nsalutation = \"Hi\"\n[logging]\nformat = \"json\"\nlevel = \"warn\""),
        )
        .unwrap();
        assert_eq!(settings.salutation, "Hi");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_override_beats_file() {
        let overrides = SettingsOverrides {
            salutation: Some("Hey"),
            log_format: Some(LogFormat::Compact),
            verbose: true,
            ..Default::default()
        };
        let settings = GreetingSettings::merge(
            &overrides,
            file("[greeting]\nsalutation = \"Hi\"\n[logging]\nformat = \"json\""),
        )
        .unwrap();
        assert_eq!(settings.salutation, "Hey");
        assert_eq!(settings.log_format, LogFormat::Compact);
        assert!(settings.verbose);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = SettingsOverrides {
            salutation: Some("Good evening"),
            ..Default::default()
        };
        assert!(GreetingSettings::merge(&overrides, None).is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let overrides = SettingsOverrides {
            config_path: Some("/no/such/dir/greeter.toml"),
            ..Default::default()
        };
        assert!(GreetingSettings::resolve(&overrides).is_err());
    }
}
