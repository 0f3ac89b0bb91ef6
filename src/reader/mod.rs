//! 表ファイル読み込みモジュール
//!
//! Excel系（calamine）とCSV/TSV（csvクレート）から `Table` を作る。
//! 先頭行をヘッダーとして扱う。

mod csv_reader;
mod spreadsheet;

use crate::error::{KeigoError, Result};
use keigo_common::Table;
use std::path::Path;

/// 入力ファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Spreadsheet,
    Csv,
    Tsv,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputKind::Spreadsheet),
            "csv" | "txt" => Ok(InputKind::Csv),
            "tsv" => Ok(InputKind::Tsv),
            _ => Err(KeigoError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// シート名一覧（CSV/TSVはファイル名を1シートとして返す）
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    match InputKind::from_path(path)? {
        InputKind::Spreadsheet => spreadsheet::sheet_names(path),
        InputKind::Csv | InputKind::Tsv => Ok(vec![csv_reader::sheet_name(path)]),
    }
}

/// 表を読み込む（シート省略時は先頭シート）
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    ensure_exists(path)?;
    let table = match InputKind::from_path(path)? {
        InputKind::Spreadsheet => spreadsheet::read_sheet(path, sheet)?,
        InputKind::Csv => csv_reader::read_delimited(path, b',')?,
        InputKind::Tsv => csv_reader::read_delimited(path, b'\t')?,
    };
    tracing::debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.len(),
        "表を読み込みました"
    );
    Ok(table)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(KeigoError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// ヘッダー名を整える
///
/// 空欄は `Unnamed: {位置}`、重複は `名前.1`, `名前.2` … とする。
pub(crate) fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(raw.len());

    for (i, name) in raw.into_iter().enumerate() {
        let name = name.trim().to_string();
        let base = if name.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut n = 1;
        while headers.contains(&candidate) {
            candidate = format!("{}.{}", base, n);
            n += 1;
        }
        headers.push(candidate);
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind() {
        assert_eq!(InputKind::from_path(Path::new("a.xlsx")).unwrap(), InputKind::Spreadsheet);
        assert_eq!(InputKind::from_path(Path::new("a.XLS")).unwrap(), InputKind::Spreadsheet);
        assert_eq!(InputKind::from_path(Path::new("a.csv")).unwrap(), InputKind::Csv);
        assert_eq!(InputKind::from_path(Path::new("a.tsv")).unwrap(), InputKind::Tsv);
        assert!(InputKind::from_path(Path::new("a.pdf")).is_err());
        assert!(InputKind::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_normalize_headers() {
        let headers = normalize_headers(vec![
            "話者".into(),
            "".into(),
            "セリフ".into(),
            "セリフ".into(),
            " セリフ ".into(),
        ]);
        assert_eq!(headers, vec!["話者", "Unnamed: 1", "セリフ", "セリフ.1", "セリフ.2"]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_table(Path::new("/nonexistent/script.xlsx"), None).unwrap_err();
        assert!(matches!(err, KeigoError::FileNotFound(_)));
    }
}
