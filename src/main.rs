use bitcheckers::application::game_service::GameService;
use bitcheckers::config::AppConfig;
use bitcheckers::interface::console::ConsoleInterface;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitcheckers=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load();
    tracing::info!(
        "bitcheckers v{} starting, save file {}",
        env!("CARGO_PKG_VERSION"),
        config.save.default_file
    );

    let service = GameService::new(config);
    ConsoleInterface::run(service);
}
