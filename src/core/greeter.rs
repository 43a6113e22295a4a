use crate::core::ConfigProvider;
use crate::domain::model::NameInput;
use crate::utils::error::Result;
use crate::utils::validation::validate_salutation;

pub const DEFAULT_SALUTATION: &str = "Hello";
pub const FALLBACK_NAME: &str = "Stranger";

/// Upper-cases the first character and lower-cases the rest. Characters after
/// punctuation are not treated as word starts: `o'neill` becomes `O'neill`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    salutation: String,
}

impl Greeter {
    pub fn new(salutation: impl Into<String>) -> Result<Self> {
        let salutation = salutation.into();
        validate_salutation("salutation", &salutation)?;
        Ok(Self { salutation })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.salutation())
    }

    pub fn salutation(&self) -> &str {
        &self.salutation
    }

    /// Never fails: anything that is not a non-blank string gets the
    /// `Stranger` greeting.
    pub fn greet(&self, input: impl Into<NameInput>) -> String {
        let name = match input.into() {
            NameInput::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    tracing::debug!("Blank name, using fallback");
                    None
                } else {
                    Some(capitalize(trimmed))
                }
            }
            NameInput::Other(kind) => {
                tracing::debug!("Non-string input ({:?}), using fallback", kind);
                None
            }
        };

        format!(
            "{}, {}!",
            self.salutation,
            name.as_deref().unwrap_or(FALLBACK_NAME)
        )
    }

    pub fn fallback_greeting(&self) -> String {
        format!("{}, {}!", self.salutation, FALLBACK_NAME)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            salutation: DEFAULT_SALUTATION.to_string(),
        }
    }
}

/// 使用預設問候語 "Hello"
pub fn greet(input: impl Into<NameInput>) -> String {
    Greeter::default().greet(input)
}
