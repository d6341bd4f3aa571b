//! Text export of colour tables.
//!
//! The CSV and GPL layouts are byte-for-byte contracts with the files other
//! tools already consume; JSON is a convenience for scripting.

mod csv;
mod gpl;

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::types::ColourTable;

pub use csv::{format_ratio, to_csv};
pub use gpl::{palette_name, to_gpl};

/// Default file name for a full-table CSV export.
pub const DEFAULT_CSV_NAME: &str = "colors_all.csv";

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Gpl,
    Json,
}

impl ExportFormat {
    /// Infer a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "gpl" => Some(Self::Gpl),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Gpl => "gpl",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serialize the rows as a pretty-printed JSON array.
pub fn to_json(table: &ColourTable) -> Result<String> {
    serde_json::to_string_pretty(&table.entries).map_err(|e| SwatchError::Parse {
        message: format!("Failed to serialize table: {}", e),
        help: None,
    })
}

/// Render `table` in `format`. `name` labels GPL palettes.
pub fn render(table: &ColourTable, format: ExportFormat, name: &str) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(table)),
        ExportFormat::Gpl => Ok(to_gpl(table, name)),
        ExportFormat::Json => to_json(table),
    }
}

/// Render `table` and write it to `path`.
pub fn write_table(
    path: &Path,
    table: &ColourTable,
    format: ExportFormat,
    name: &str,
) -> Result<()> {
    let content = render(table, format, name)?;

    fs::write(path, content).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write {} export: {}", format, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, ColourEntry};
    use tempfile::tempdir;

    fn table() -> ColourTable {
        ColourTable::from_discovered(
            3,
            vec![
                ColourEntry::new(Colour::rgb(0, 0, 0), 1, 3),
                ColourEntry::new(Colour::rgb(255, 255, 255), 2, 3),
            ],
        )
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_path(Path::new("dir/p.GPL")), Some(ExportFormat::Gpl));
        assert_eq!(ExportFormat::from_path(Path::new("x.json")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("x.txt")), None);
        assert_eq!(ExportFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_json_rows() {
        let json = to_json(&table()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["hex"], "#FFFFFF");
        assert_eq!(rows[0]["count"], 2);
        assert_eq!(rows[1]["r"], 0);
    }

    #[test]
    fn test_write_table_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CSV_NAME);

        write_table(&path, &table(), ExportFormat::Csv, "unused").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "hex,r,g,b,count,ratio\n#FFFFFF,255,255,255,2,0.666667\n#000000,0,0,0,1,0.333333"
        );
    }

    #[test]
    fn test_write_table_gpl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.gpl");

        write_table(&path, &table(), ExportFormat::Gpl, "mine").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("GIMP Palette\nName: mine\n"));
        assert!(content.ends_with("0 0 0\t#000000"));
    }

    #[test]
    fn test_write_table_bad_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_table(&path, &table(), ExportFormat::Csv, "x").unwrap_err();
        assert!(matches!(err, SwatchError::Io { .. }));
    }
}
