//! anchorcam binary.

use tracing::{error, info};

use anchorcam::{logging, AppConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    info!("Starting anchorcam");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Config: {:?}", config);

    match anchorcam::run(config).await {
        Ok(summary) => info!(
            selection = %summary.selection,
            frames = summary.stats.frames,
            "anchorcam finished"
        ),
        Err(e) if e.is_permission_denied() => {
            error!("Camera access is required to continue: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("anchorcam failed: {}", e);
            std::process::exit(1);
        }
    }
}
