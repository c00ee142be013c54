// src/services/equity.rs
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::env;

use super::error::{FetchError, FetchResult};
use crate::models::DividendRecord;

const POLYGON_BASE: &str = "https://api.polygon.io";

#[derive(Debug, Deserialize)]
struct DividendsResponse {
    #[serde(default)]
    results: Vec<DividendRecord>,
}

#[derive(Debug, Deserialize)]
struct PrevCloseResponse {
    #[serde(rename = "resultsCount", default)]
    results_count: i64,
    #[serde(default)]
    results: Vec<PrevCloseBar>,
}

#[derive(Debug, Deserialize)]
struct PrevCloseBar {
    /// Close price of the aggregate bar.
    c: Option<f64>,
}

// The financials envelope is deeply nested; every level is optional so a
// missing segment deserializes instead of failing the whole response.
#[derive(Debug, Default, Deserialize)]
struct FinancialsResponse {
    #[serde(default)]
    results: Vec<FinancialsResult>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialsResult {
    financials: Option<Financials>,
}

#[derive(Debug, Default, Deserialize)]
struct Financials {
    income_statement: Option<IncomeStatement>,
}

#[derive(Debug, Default, Deserialize)]
struct IncomeStatement {
    basic_earnings_per_share: Option<DataPoint>,
}

#[derive(Debug, Default, Deserialize)]
struct DataPoint {
    value: Option<f64>,
}

/// Polygon.io client. Holds the API key for the lifetime of the run;
/// construction is the only place the environment is consulted.
pub struct PolygonClient {
    client: Client,
    api_key: String,
}

impl PolygonClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        PolygonClient {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Read POLYGON_API_KEY from the environment. An unset or empty key is
    /// a typed error so callers can skip every equity call up front.
    pub fn from_env() -> FetchResult<Self> {
        match env::var("POLYGON_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(PolygonClient::new(key)),
            _ => Err(FetchError::MissingCredential),
        }
    }

    /// Dividend history for a ticker, most recent first per provider
    /// ordering. The caller treats index 0 as "latest".
    pub async fn fetch_dividends(&self, ticker: &str) -> FetchResult<Vec<DividendRecord>> {
        let endpoint = "dividends";
        let url = format!(
            "{base}/v3/reference/dividends?ticker={ticker}&apiKey={key}",
            base = POLYGON_BASE,
            ticker = ticker,
            key = self.api_key
        );
        info!("Fetching dividend history for {}", ticker);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { endpoint, status });
        }

        let body: DividendsResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Malformed { endpoint, source })?;
        if body.results.is_empty() {
            return Err(FetchError::MissingField {
                endpoint,
                field: "results",
            });
        }

        debug!(
            "Received {} dividend records for {}",
            body.results.len(),
            ticker
        );
        Ok(body.results)
    }

    /// Previous trading day's closing price for a ticker.
    pub async fn fetch_previous_close(&self, ticker: &str) -> FetchResult<f64> {
        let endpoint = "previous close";
        let url = format!(
            "{base}/v2/aggs/ticker/{ticker}/prev?apiKey={key}",
            base = POLYGON_BASE,
            ticker = ticker,
            key = self.api_key
        );
        info!("Fetching previous close for {}", ticker);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { endpoint, status });
        }

        let body: PrevCloseResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Malformed { endpoint, source })?;
        extract_previous_close(body).ok_or(FetchError::MissingField {
            endpoint,
            field: "results[0].c",
        })
    }

    /// Basic EPS from the single most recent quarterly filing.
    pub async fn fetch_latest_eps(&self, ticker: &str) -> FetchResult<f64> {
        let endpoint = "financials";
        let url = format!(
            "{base}/vX/reference/financials?ticker={ticker}&limit=1&timeframe=quarterly&sort=filing_date&apiKey={key}",
            base = POLYGON_BASE,
            ticker = ticker,
            key = self.api_key
        );
        info!("Fetching latest quarterly financials for {}", ticker);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { endpoint, status });
        }

        let body: FinancialsResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Malformed { endpoint, source })?;
        extract_eps(body).ok_or(FetchError::MissingField {
            endpoint,
            field: "financials.income_statement.basic_earnings_per_share.value",
        })
    }
}

fn extract_previous_close(body: PrevCloseResponse) -> Option<f64> {
    if body.results_count <= 0 {
        return None;
    }
    body.results.first().and_then(|bar| bar.c)
}

/// Walk financials -> income_statement -> basic_earnings_per_share -> value.
/// A missing segment at any level reads as no data; partial filings are not
/// distinguished from absent ones.
fn extract_eps(body: FinancialsResponse) -> Option<f64> {
    body.results
        .into_iter()
        .next()
        .and_then(|result| result.financials)
        .and_then(|financials| financials.income_statement)
        .and_then(|statement| statement.basic_earnings_per_share)
        .and_then(|eps| eps.value)
}
