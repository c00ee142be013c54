use dotenv::dotenv;
use env_logger;
use log::{info, warn};

use yield_dashboard::report;
use yield_dashboard::services::equity::PolygonClient;

/// The report is generated for a single fixed ticker; there are no CLI
/// flags.
const COMMON_STOCK_TICKER: &str = "MSFT";

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the report run...");

    // Without a credential the equity calls are skipped entirely; the
    // treasury section does not need one and still runs.
    let polygon = match PolygonClient::from_env() {
        Ok(client) => Some(client),
        Err(err) => {
            warn!("{}; common stock sections will be incomplete", err);
            None
        }
    };

    report::generate_report(polygon.as_ref(), COMMON_STOCK_TICKER).await;
}
