// src/report/tables.rs
use tabled::builder::Builder;
use tabled::Table;

use crate::services::calculations::StockMetrics;

/// Two-column metric/value grid for the common stock section.
pub fn stock_table(stock: &StockMetrics) -> Table {
    let rows = vec![
        vec!["Metric".to_string(), "Value".to_string()],
        vec!["Ticker".to_string(), stock.ticker.clone()],
        vec![
            "Dividend per Share (Latest)".to_string(),
            format!("${:.2}", stock.dividend_per_share),
        ],
        vec![
            "Forward Dividend Yield (%)".to_string(),
            format!("{:.2}", stock.forward_yield_pct),
        ],
        vec![
            "Dividend Payout Ratio (Quarterly, %)".to_string(),
            format!("{:.2}", stock.payout_ratio_pct),
        ],
    ];
    Builder::from_iter(&rows).build()
}

/// Asset class / latest rate grid. Rows whose selection produced nothing
/// are omitted entirely.
pub fn fixed_income_table(tips_rate: Option<f64>, treasury_note_rate: Option<f64>) -> Table {
    let mut rows = vec![vec![
        "Asset Class".to_string(),
        "Latest Average Interest Rate".to_string(),
    ]];
    if let Some(rate) = tips_rate {
        rows.push(vec!["T.I.P.S.".to_string(), format!("{:.2}%", rate)]);
    }
    if let Some(rate) = treasury_note_rate {
        rows.push(vec![
            "U.S. Treasury Note".to_string(),
            format!("{:.2}%", rate),
        ]);
    }
    Builder::from_iter(&rows).build()
}
