//! Excel/ODS読み込み（calamine）

use super::normalize_headers;
use crate::error::{KeigoError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use keigo_common::{CellValue, Row, Table};
use std::path::Path;

pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path)
        .map_err(|e| KeigoError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;
    Ok(workbook.sheet_names())
}

pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| KeigoError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => {
            if !names.iter().any(|n| n == name) {
                return Err(KeigoError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| KeigoError::EmptySheet(path.display().to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| KeigoError::SpreadsheetRead(format!("{}: {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| KeigoError::EmptySheet(sheet_name.clone()))?;

    let columns = normalize_headers(header.iter().map(|c| cell_value(c).as_text()).collect());
    let mut table = Table::new(columns);

    for row in rows {
        table.push_row(Row::new(row.iter().map(cell_value).collect()));
    }

    Ok(table)
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::String("はい".into())),
            CellValue::Text("はい".into())
        );
        assert_eq!(cell_value(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(cell_value(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Bool(true));
    }
}
