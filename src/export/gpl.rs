//! GIMP palette (`.gpl`) rendering.

use crate::types::ColourTable;

/// Render a table as a GIMP palette named `name`.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn to_gpl(table: &ColourTable, name: &str) -> String {
    let mut lines = vec![
        "GIMP Palette".to_string(),
        format!("Name: {}", name),
        "Columns: 0".to_string(),
        "# R G B  Name".to_string(),
    ];
    lines.extend(table.iter().map(|e| format!("{} {} {}\t{}", e.r, e.g, e.b, e.hex)));

    lines.join("\n")
}

/// Default palette name for a k-colour palette.
pub fn palette_name(k: usize) -> String {
    format!("palette_K{}", k)
}
