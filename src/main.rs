use clap::Parser;
use greeter::core::NameSource;
use greeter::utils::logger;
use greeter::{
    CliConfig, FixedSource, GreetEngine, Greeter, GreeterError, GreetingSettings, PromptSource,
};

fn report_failure(e: &GreeterError) -> i32 {
    tracing::error!(
        "❌ Greeting failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    e.severity().exit_code()
}

fn run_with<S: NameSource>(source: S, greeter: Greeter) -> greeter::Result<String> {
    GreetEngine::new(source, greeter).run()
}

fn main() {
    let config = CliConfig::parse();

    let settings = match GreetingSettings::resolve(&config.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(
        settings.verbose,
        settings.log_format,
        settings.log_level.as_deref(),
    );

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let greeter = match Greeter::from_config(&settings) {
        Ok(greeter) => greeter,
        Err(e) => std::process::exit(report_failure(&e)),
    };

    let result = match config.name.as_deref() {
        Some(name) => run_with(FixedSource::parsed(name, config.input_mode()), greeter),
        None => run_with(PromptSource::stdio(config.input_mode()), greeter),
    };

    match result {
        Ok(greeting) => println!("{}", greeting),
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
