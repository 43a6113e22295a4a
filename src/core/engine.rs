use crate::core::greeter::Greeter;
use crate::core::NameSource;
use crate::utils::error::Result;

pub struct GreetEngine<S: NameSource> {
    source: S,
    greeter: Greeter,
}

impl<S: NameSource> GreetEngine<S> {
    pub fn new(source: S, greeter: Greeter) -> Self {
        Self { source, greeter }
    }

    pub fn greeter(&self) -> &Greeter {
        &self.greeter
    }

    /// 讀取一個名字並產生問候語
    pub fn run(&mut self) -> Result<String> {
        tracing::debug!("Reading name from source");
        let input = self.source.read_name()?;

        let usable = input.has_usable_name();
        let greeting = self.greeter.greet(input);

        if usable {
            tracing::info!("👋 Greeted user");
        } else {
            tracing::info!("👤 Unusable name, greeted as stranger");
        }

        Ok(greeting)
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
