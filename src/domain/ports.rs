use crate::domain::model::NameInput;
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn salutation(&self) -> &str;
}

/// 名字來源：互動式提示、固定值或測試替身
pub trait NameSource {
    fn read_name(&mut self) -> Result<NameInput>;
}
