//! CSV rendering.

use crate::types::ColourTable;

const HEADER: &str = "hex,r,g,b,count,ratio";

/// Render a table as CSV.
///
/// Rows are joined with `\n`; there is no newline after the last row.
pub fn to_csv(table: &ColourTable) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    let rows: Vec<String> = table
        .iter()
        .map(|e| {
            format!(
                "{},{},{},{},{},{}",
                e.hex,
                e.r,
                e.g,
                e.b,
                e.count,
                format_ratio(e.ratio)
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));

    out
}

/// Six decimal places, ties rounding up.
///
/// The only binary values that sit exactly on a seventh-decimal tie are odd
/// multiples of 1/128; nudge those so they do not round to even.
pub fn format_ratio(ratio: f64) -> String {
    let scaled = ratio * 128.0;
    if scaled.fract() == 0.0 && (scaled as u64) % 2 == 1 {
        format!("{:.6}", ratio + 1e-9)
    } else {
        format!("{:.6}", ratio)
    }
}
