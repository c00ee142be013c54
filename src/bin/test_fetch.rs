// src/bin/test_fetch.rs
use anyhow::Context;
use dotenv::dotenv;

use yield_dashboard::services::equity::PolygonClient;
use yield_dashboard::services::treasury::fetch_avg_interest_rates;

fn status<T, E>(result: &Result<T, E>) -> &'static str {
    match result {
        Ok(_) => "OK",
        Err(_) => "Failed",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Unlike the report, the fetch check refuses to run without the key.
    let client = PolygonClient::from_env()
        .context("Please set the POLYGON_API_KEY variable and try again")?;

    println!("--- Testing data fetching functions ---");

    let ticker = "MSFT";
    println!("\nFetching data for {}...", ticker);
    let dividends = client.fetch_dividends(ticker).await;
    let price = client.fetch_previous_close(ticker).await;
    let eps = client.fetch_latest_eps(ticker).await;
    println!("  Dividends: {}", status(&dividends));
    println!("  Price: {}", status(&price));
    println!("  EPS: {}", status(&eps));

    println!("\nFetching Treasury data...");
    let treasury = fetch_avg_interest_rates().await;
    println!("  Treasury Data: {}", status(&treasury));
    if let Ok(rates) = &treasury {
        println!("  Sample Treasury Data:");
        for row in rates.iter().take(2) {
            println!(
                "    {} | {} | {}",
                row.record_date, row.security_desc, row.avg_interest_rate_amt
            );
        }
    }

    Ok(())
}
