use address_book::domain::ports::{ConfigProvider, SystemClock};
use address_book::utils::logger;
use address_book::{Assistant, CliConfig, JsonFileStorage, Settings};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // logging needs the config file's level, so settings come first
    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from {}", path);
    }
    tracing::debug!("Settings: {:?}", settings);

    let storage = JsonFileStorage::new(settings.data_file());
    let mut assistant =
        match Assistant::load(storage, SystemClock, settings.birthday_window_days()) {
            Ok(assistant) => assistant,
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load {}: {} (Category: {:?})",
                    settings.data_file(),
                    e,
                    e.category()
                );
                eprintln!("❌ Cannot read address book '{}': {}", settings.data_file(), e);
                eprintln!("💡 Fix or move the file; it will not be overwritten");
                std::process::exit(1);
            }
        };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    assistant.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
