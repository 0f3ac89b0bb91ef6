//! CSV/TSV読み込み（csvクレート）

use super::normalize_headers;
use crate::error::Result;
use keigo_common::{CellValue, Row, Table};
use std::path::Path;

/// CSVはファイル名（拡張子なし）を1シートとして扱う
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "sheet1".to_string())
}

pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    parse_delimited(&content, delimiter)
}

/// 文字列からパース（UTF-8 BOMは除去）
pub fn parse_delimited(content: &str, delimiter: u8) -> Result<Table> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = Table::new(normalize_headers(headers));

    for record in reader.records() {
        let record = record?;
        table.push_row(Row::new(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_bom() {
        let table = parse_delimited("\u{feff}話者,セリフ\nA,\"はい、そうです。\"\nB,\n", b',').unwrap();
        assert_eq!(table.columns, vec!["話者", "セリフ"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get(1), &CellValue::Text("はい、そうです。".into()));
        assert_eq!(table.rows[1].get(1), &CellValue::Empty);
    }

    #[test]
    fn test_parse_tsv_ragged() {
        let table = parse_delimited("id\ttext\n1\n2\tどうぞ\textra\n", b'\t').unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.rows.iter().all(|r| r.len() == 2));
        assert_eq!(table.rows[1].get(1), &CellValue::Text("どうぞ".into()));
    }

    #[test]
    fn test_sheet_name() {
        assert_eq!(sheet_name(Path::new("dir/script_01.csv")), "script_01");
    }
}
