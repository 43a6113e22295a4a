pub mod batch;
pub mod engine;
pub mod greeter;

pub use crate::domain::model::{InputKind, NameInput};
pub use crate::domain::ports::{ConfigProvider, NameSource};
pub use crate::utils::error::Result;
