// src/report/mod.rs
pub mod chart;
pub mod tables;

use log::warn;

use crate::models::{DividendRecord, TreasuryRate, YieldComparison};
use crate::services::calculations::{self, StockMetrics};
use crate::services::equity::PolygonClient;
use crate::services::error::FetchResult;
use crate::services::treasury;

/// Everything the report prints or plots, assembled before any output so
/// the shape is testable without the network.
#[derive(Debug, Default)]
pub struct Report {
    pub stock: Option<StockMetrics>,
    pub tips_rate: Option<f64>,
    pub treasury_note_rate: Option<f64>,
    /// Whether the treasury fetch produced any rows at all. Drives the
    /// "could not retrieve" message as opposed to an empty table.
    pub treasury_available: bool,
}

impl Report {
    /// Comparison entries in display order: ticker, T.I.P.S., treasury
    /// note. Missing sources are omitted, never zero-filled.
    pub fn yield_comparison(&self) -> YieldComparison {
        let mut comparison = YieldComparison::default();
        if let Some(stock) = &self.stock {
            comparison.push(stock.ticker.clone(), stock.forward_yield_pct);
        }
        if let Some(rate) = self.tips_rate {
            comparison.push("T.I.P.S.", rate);
        }
        if let Some(rate) = self.treasury_note_rate {
            comparison.push("U.S. Treasury Note", rate);
        }
        comparison
    }
}

/// Build the report from raw fetch results. Pure; all I/O lives in
/// `generate_report`.
pub fn assemble_report(
    ticker: &str,
    dividends: Option<Vec<DividendRecord>>,
    previous_close: Option<f64>,
    eps: Option<f64>,
    treasury_rates: Option<Vec<TreasuryRate>>,
) -> Report {
    // The stock section needs all three equity fetches. Anything missing
    // drops the whole section rather than computing with a fallback.
    let stock = match (dividends, previous_close, eps) {
        (Some(dividends), Some(previous_close), Some(eps)) => {
            calculations::derive_stock_metrics(ticker, &dividends, previous_close, eps)
        }
        _ => None,
    };

    let (tips_rate, treasury_note_rate, treasury_available) = match treasury_rates {
        Some(rates) if !rates.is_empty() => (
            calculations::select_tips_rate(&rates),
            calculations::select_treasury_note_rate(&rates),
            true,
        ),
        _ => (None, None, false),
    };

    Report {
        stock,
        tips_rate,
        treasury_note_rate,
        treasury_available,
    }
}

/// Fetch, derive, print, plot. One linear pass per invocation; each source
/// that fails is logged and reported as absent.
pub async fn generate_report(polygon: Option<&PolygonClient>, ticker: &str) {
    let (dividends, previous_close, eps) = match polygon {
        Some(client) => (
            log_absent("Dividend history", client.fetch_dividends(ticker).await),
            log_absent("Previous close", client.fetch_previous_close(ticker).await),
            log_absent("Quarterly EPS", client.fetch_latest_eps(ticker).await),
        ),
        None => {
            warn!("No Polygon credential; skipping all equity calls");
            (None, None, None)
        }
    };
    let treasury_rates = log_absent("Treasury rates", treasury::fetch_avg_interest_rates().await);

    let report = assemble_report(ticker, dividends, previous_close, eps, treasury_rates);
    print_report(&report);

    let comparison = report.yield_comparison();
    if comparison.is_empty() {
        println!("\nNot enough data to generate a comparison chart.");
    } else {
        chart::write_yield_chart(&comparison, chart::CHART_FILENAME);
        println!(
            "\nGenerated yield comparison chart: {}",
            chart::CHART_FILENAME
        );
    }
}

fn print_report(report: &Report) {
    println!("--- Dividend Analysis: Common Stock ---");
    match &report.stock {
        Some(stock) => println!("{}", tables::stock_table(stock)),
        None => println!("Could not retrieve complete data for common stock."),
    }

    println!("\n--- Interest Rate Analysis: Fixed Income ---");
    if report.treasury_available {
        println!(
            "{}",
            tables::fixed_income_table(report.tips_rate, report.treasury_note_rate)
        );
    } else {
        println!("Could not retrieve Treasury data.");
    }
}

fn log_absent<T>(label: &str, result: FetchResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{} unavailable: {}", label, err);
            None
        }
    }
}
