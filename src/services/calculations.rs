// src/services/calculations.rs
use log::warn;

use crate::models::{DividendRecord, TreasuryRate};

/// Payments per year assumed when the provider omits the frequency field.
const DEFAULT_FREQUENCY: u32 = 4;

/// Substring marking inflation-protected securities in the dataset.
const TIPS_FILTER: &str = "Inflation";

const TREASURY_NOTES_DESC: &str = "Treasury Notes";

/// Derived per-ticker dividend metrics.
#[derive(Debug, Clone)]
pub struct StockMetrics {
    pub ticker: String,
    pub dividend_per_share: f64,
    pub annual_dividend: f64,
    pub forward_yield_pct: f64,
    pub payout_ratio_pct: f64,
}

/// Derive the stock metrics from the fetched inputs. Returns None only
/// when the dividend history is empty.
pub fn derive_stock_metrics(
    ticker: &str,
    dividends: &[DividendRecord],
    previous_close: f64,
    eps: f64,
) -> Option<StockMetrics> {
    // "Latest" is whatever the provider returned first; no date sort is
    // applied on top of the provider ordering.
    let latest = dividends.first()?;
    let dividend_per_share = latest.cash_amount;
    let frequency = latest.frequency.unwrap_or(DEFAULT_FREQUENCY);
    let annual_dividend = dividend_per_share * f64::from(frequency);

    let forward_yield_pct = if previous_close != 0.0 {
        annual_dividend / previous_close * 100.0
    } else {
        0.0
    };

    // A zero-EPS quarter defines the payout ratio as infinite, not an error.
    let payout_ratio_pct = if eps != 0.0 {
        dividend_per_share / eps * 100.0
    } else {
        f64::INFINITY
    };

    Some(StockMetrics {
        ticker: ticker.to_string(),
        dividend_per_share,
        annual_dividend,
        forward_yield_pct,
        payout_ratio_pct,
    })
}

/// Highest average rate among inflation-protected rows in the fetched page.
/// The maximum rate wins, not the most recent date; the first row wins ties.
pub fn select_tips_rate(rates: &[TreasuryRate]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for row in rates
        .iter()
        .filter(|row| row.security_desc.contains(TIPS_FILTER))
    {
        match row.avg_interest_rate_amt.parse::<f64>() {
            Ok(rate) => {
                if best.map_or(true, |current| rate > current) {
                    best = Some(rate);
                }
            }
            Err(_) => warn!(
                "Skipping unparseable rate {:?} for {:?}",
                row.avg_interest_rate_amt, row.security_desc
            ),
        }
    }
    best
}

/// First row described exactly as "Treasury Notes", in provider order. The
/// requested sort is descending record date, so this is the newest row the
/// provider returned.
pub fn select_treasury_note_rate(rates: &[TreasuryRate]) -> Option<f64> {
    let row = rates
        .iter()
        .find(|row| row.security_desc == TREASURY_NOTES_DESC)?;
    match row.avg_interest_rate_amt.parse::<f64>() {
        Ok(rate) => Some(rate),
        Err(_) => {
            warn!(
                "Unparseable rate {:?} for Treasury Notes row dated {}",
                row.avg_interest_rate_amt, row.record_date
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dividend(cash_amount: f64, frequency: Option<u32>) -> DividendRecord {
        DividendRecord {
            cash_amount,
            frequency,
        }
    }

    fn rate(desc: &str, amount: &str) -> TreasuryRate {
        TreasuryRate {
            record_date: "2024-05-31".to_string(),
            security_desc: desc.to_string(),
            avg_interest_rate_amt: amount.to_string(),
        }
    }

    #[test]
    fn annual_dividend_and_forward_yield() {
        let metrics =
            derive_stock_metrics("MSFT", &[dividend(0.62, Some(4))], 420.0, 2.35).unwrap();
        assert!((metrics.annual_dividend - 2.48).abs() < 1e-9);
        assert!((metrics.forward_yield_pct - 0.59047619).abs() < 1e-6);
    }

    #[test]
    fn frequency_defaults_to_quarterly() {
        let metrics = derive_stock_metrics("MSFT", &[dividend(0.62, None)], 420.0, 2.35).unwrap();
        assert!((metrics.annual_dividend - 2.48).abs() < 1e-9);
    }

    #[test]
    fn only_first_dividend_record_is_used() {
        let dividends = [dividend(0.75, Some(4)), dividend(0.62, Some(4))];
        let metrics = derive_stock_metrics("MSFT", &dividends, 420.0, 2.35).unwrap();
        assert!((metrics.dividend_per_share - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_dividend_history_yields_no_metrics() {
        assert!(derive_stock_metrics("MSFT", &[], 420.0, 2.35).is_none());
    }

    #[test]
    fn zero_eps_payout_ratio_is_infinite() {
        let metrics =
            derive_stock_metrics("MSFT", &[dividend(0.62, Some(4))], 420.0, 0.0).unwrap();
        assert_eq!(metrics.payout_ratio_pct, f64::INFINITY);
        // Formatting infinity must not panic; it renders as "inf".
        assert_eq!(format!("{:.2}", metrics.payout_ratio_pct), "inf");
    }

    #[test]
    fn zero_price_yields_zero_forward_yield() {
        let metrics = derive_stock_metrics("MSFT", &[dividend(0.62, Some(4))], 0.0, 2.35).unwrap();
        assert_eq!(metrics.forward_yield_pct, 0.0);
    }

    #[test]
    fn tips_selection_takes_maximum_rate() {
        let rows = [
            rate("Treasury Inflation-Protected Securities (10-Yr)", "1.75"),
            rate("Treasury Inflation-Protected Securities (5-Yr)", "2.10"),
        ];
        assert_eq!(select_tips_rate(&rows), Some(2.10));
    }

    #[test]
    fn tips_tie_goes_to_first_row() {
        let rows = [
            rate("Treasury Inflation-Protected Securities (10-Yr)", "2.10"),
            rate("Treasury Inflation-Protected Securities (5-Yr)", "2.10"),
        ];
        assert_eq!(select_tips_rate(&rows), Some(2.10));
    }

    #[test]
    fn tips_filter_is_case_sensitive() {
        let rows = [
            rate("Treasury inflation-indexed bonds", "9.99"),
            rate("Treasury Notes", "4.00"),
        ];
        assert_eq!(select_tips_rate(&rows), None);
    }

    #[test]
    fn tips_skips_unparseable_rates() {
        let rows = [
            rate("Treasury Inflation-Protected Securities (TIPS)", "n/a"),
            rate("Treasury Inflation-Protected Securities (TIPS)", "1.50"),
        ];
        assert_eq!(select_tips_rate(&rows), Some(1.50));
    }

    #[test]
    fn treasury_note_takes_first_row_in_provider_order() {
        let rows = [
            rate("Treasury Bills", "5.10"),
            rate("Treasury Notes", "2.50"),
            rate("Treasury Notes", "4.50"),
        ];
        assert_eq!(select_treasury_note_rate(&rows), Some(2.50));
    }

    #[test]
    fn treasury_note_requires_exact_description() {
        let rows = [rate("Treasury Notes (callable)", "2.50")];
        assert_eq!(select_treasury_note_rate(&rows), None);
    }

    #[test]
    fn no_matching_rows_selects_nothing() {
        let rows = [rate("Treasury Bills", "5.10")];
        assert_eq!(select_tips_rate(&rows), None);
        assert_eq!(select_treasury_note_rate(&rows), None);
    }
}
