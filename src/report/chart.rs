// src/report/chart.rs
use log::info;
use plotly::common::{Marker, TextPosition};
use plotly::layout::Axis;
use plotly::{Bar, ImageFormat, Layout, Plot};

use crate::models::YieldComparison;

pub const CHART_FILENAME: &str = "yield_comparison.png";

const BAR_COLORS: [&str; 3] = ["skyblue", "lightgreen", "salmon"];
const CHART_WIDTH: usize = 1000;
const CHART_HEIGHT: usize = 600;

/// One vertical bar per comparison entry, in insertion order, annotated
/// with the rounded percentage above the bar.
pub fn yield_chart(comparison: &YieldComparison) -> Plot {
    let labels: Vec<String> = comparison
        .entries()
        .iter()
        .map(|(label, _)| label.clone())
        .collect();
    let values: Vec<f64> = comparison
        .entries()
        .iter()
        .map(|(_, value)| *value)
        .collect();
    let annotations: Vec<String> = values.iter().map(|value| format!("{:.2}%", value)).collect();
    let colors: Vec<&str> = BAR_COLORS
        .iter()
        .copied()
        .cycle()
        .take(labels.len())
        .collect();

    let trace = Bar::new(labels, values)
        .text_array(annotations)
        .text_position(TextPosition::Outside)
        .marker(Marker::new().color_array(colors));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title("Yield Comparison: Stock vs. Fixed Income")
            .y_axis(Axis::new().title("Yield / Interest Rate (%)")),
    );
    plot
}

/// Render the comparison and save it as a static image in the working
/// directory.
pub fn write_yield_chart(comparison: &YieldComparison, filename: &str) {
    let plot = yield_chart(comparison);
    info!("Writing yield comparison chart to {}", filename);
    plot.write_image(filename, ImageFormat::PNG, CHART_WIDTH, CHART_HEIGHT, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_keeps_insertion_order_and_annotations() {
        let mut comparison = YieldComparison::default();
        comparison.push("MSFT", 0.59);
        comparison.push("T.I.P.S.", 2.10);
        comparison.push("U.S. Treasury Note", 4.25);

        let json = yield_chart(&comparison).to_json();
        assert!(json.contains("\"type\":\"bar\""));
        assert!(json.contains("2.10%"));
        assert!(json.contains("Yield / Interest Rate (%)"));
        // Insertion order survives into the trace.
        let msft = json.find("MSFT").unwrap();
        let note = json.find("U.S. Treasury Note").unwrap();
        assert!(msft < note);
    }
}
