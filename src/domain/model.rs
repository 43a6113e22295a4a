use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// 非字串輸入的種類，只用於日誌與統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Null,
    Bool,
    Number,
    Sequence,
    Mapping,
    /// JSON 模式下無法解析的輸入行
    Unparsed,
}

/// Boundary value handed to the greeter. Callers may pass anything; only
/// `Text` can produce a personalised greeting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum NameInput {
    Text(String),
    Other(InputKind),
}

impl NameInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NameInput::Text(s) => Some(s),
            NameInput::Other(_) => None,
        }
    }

    /// 是否為非空白字串
    pub fn has_usable_name(&self) -> bool {
        self.as_text().is_some_and(|s| !s.trim().is_empty())
    }

    /// 解析一行 JSON；解析失敗時退化為 `Other(Unparsed)`
    pub fn from_json_str(line: &str) -> Self {
        match serde_json::from_str::<Value>(line) {
            Ok(value) => value.into(),
            Err(e) => {
                tracing::warn!("⚠️ Input is not valid JSON ({}), treating as unusable", e);
                NameInput::Other(InputKind::Unparsed)
            }
        }
    }
}

impl From<Value> for NameInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => NameInput::Text(s),
            Value::Null => NameInput::Other(InputKind::Null),
            Value::Bool(_) => NameInput::Other(InputKind::Bool),
            Value::Number(_) => NameInput::Other(InputKind::Number),
            Value::Array(_) => NameInput::Other(InputKind::Sequence),
            Value::Object(_) => NameInput::Other(InputKind::Mapping),
        }
    }
}

impl From<&str> for NameInput {
    fn from(s: &str) -> Self {
        NameInput::Text(s.to_string())
    }
}

impl From<String> for NameInput {
    fn from(s: String) -> Self {
        NameInput::Text(s)
    }
}

impl From<&String> for NameInput {
    fn from(s: &String) -> Self {
        NameInput::Text(s.clone())
    }
}

impl<T: Into<NameInput>> From<Option<T>> for NameInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NameInput::Other(InputKind::Null), Into::into)
    }
}

impl From<()> for NameInput {
    fn from(_: ()) -> Self {
        NameInput::Other(InputKind::Null)
    }
}

impl From<bool> for NameInput {
    fn from(_: bool) -> Self {
        NameInput::Other(InputKind::Bool)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NameInput {
                fn from(_: $t) -> Self {
                    NameInput::Other(InputKind::Number)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> From<Vec<T>> for NameInput {
    fn from(_: Vec<T>) -> Self {
        NameInput::Other(InputKind::Sequence)
    }
}

impl<T> From<&[T]> for NameInput {
    fn from(_: &[T]) -> Self {
        NameInput::Other(InputKind::Sequence)
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for NameInput {
    fn from(_: HashMap<K, V, S>) -> Self {
        NameInput::Other(InputKind::Mapping)
    }
}

impl<K, V> From<BTreeMap<K, V>> for NameInput {
    fn from(_: BTreeMap<K, V>) -> Self {
        NameInput::Other(InputKind::Mapping)
    }
}
