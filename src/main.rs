use anyhow::Context;
use clap::Parser;
use course_registration::domain::ports::ConfigProvider;
use course_registration::utils::{logger, validation::Validate};
use course_registration::{
    AppConfig, CliConfig, Console, FileProcessor, LocalStorage, RegistrationSession,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match AppConfig::from_cli(&cli).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logs {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.verbose(), config.log_level());
    }

    tracing::info!("Starting course-registration");
    tracing::debug!("Config: {:?}", config);

    let processor = FileProcessor::new(LocalStorage::default(), config.file_name());
    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut session = RegistrationSession::new(processor, console);

    let state = session.run().context("console I/O failed")?;
    tracing::debug!("Exiting with {} students in memory", state.students.len());

    Ok(())
}
