// src/services/treasury.rs
use log::{debug, info};
use serde::Deserialize;

use super::error::{FetchError, FetchResult};
use crate::models::TreasuryRate;

const AVG_RATES_URL: &str = "https://api.fiscaldata.treasury.gov/services/api/fiscal_service\
/v2/accounting/od/avg_interest_rates\
?sort=-record_date&page[number]=1&page[size]=100";

#[derive(Debug, Deserialize)]
struct AvgInterestRatesResponse {
    #[serde(default)]
    data: Vec<TreasuryRate>,
}

/// Fetch the 100 most recent average interest rate rows. No credential is
/// required. Only the first page is requested; anything older is out of
/// scope for the report.
pub async fn fetch_avg_interest_rates() -> FetchResult<Vec<TreasuryRate>> {
    let endpoint = "avg_interest_rates";
    info!(
        "Fetching treasury average interest rates from URL: {}",
        AVG_RATES_URL
    );

    let response = reqwest::get(AVG_RATES_URL).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus { endpoint, status });
    }

    let body: AvgInterestRatesResponse = response
        .json()
        .await
        .map_err(|source| FetchError::Malformed { endpoint, source })?;
    debug!("Received {} treasury rate rows", body.data.len());
    Ok(body.data)
}
