use std::path::Path;

/// Container formats for tabular files, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    /// Office Open XML workbook (`.xlsx`).
    Xlsx,
    /// Any other workbook format that can be read but not written (`.xlsm`, `.xlsb`, `.xls`, `.ods`).
    OtherWorkbook,
    /// Comma-separated values (`.csv`).
    Csv,
}

impl SpreadsheetFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Some(Self::Xlsx),
            "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::OtherWorkbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn is_workbook(self) -> bool {
        matches!(self, Self::Xlsx | Self::OtherWorkbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_case_insensitively() {
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("1b57_table.xlsx")),
            Some(SpreadsheetFormat::Xlsx)
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("sample.XLS")),
            Some(SpreadsheetFormat::OtherWorkbook)
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("dir/sample.csv")),
            Some(SpreadsheetFormat::Csv)
        );
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        assert_eq!(SpreadsheetFormat::from_path(Path::new("sample.txt")), None);
        assert_eq!(SpreadsheetFormat::from_path(Path::new("pkaS-potentials")), None);
    }
}
