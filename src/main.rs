use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinema_system::{
    config::{Config, LogFormat},
    console::Console,
    controllers,
    services::TicketPricer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Логи в stderr, чтобы не мешать меню в stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    let registry = tracing_subscriber::registry().with(filter);
    match config.log.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    info!(
        base_price = config.pricing.base_price,
        surcharge_3d = config.pricing.surcharge_3d,
        "Starting Cinema Management System"
    );

    let pricer = TicketPricer::from_config(&config.pricing);
    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    controllers::run(&mut console, pricer).await?;

    info!("Session finished");
    Ok(())
}
