//! 対話式選択モジュール
//!
//! シート・テキスト列・フィルタ（話者など）を端末上で選ぶ。

use crate::error::{KeigoError, Result};
use dialoguer::Select;
use keigo_common::{RowFilter, Table};

const NO_FILTER: &str = "（使わない）";
const NO_VALUE: &str = "（未選択）";

fn select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| KeigoError::Prompt(e.to_string()))
}

/// シートを選択
pub fn select_sheet(sheets: &[String]) -> Result<String> {
    if sheets.len() <= 1 {
        return sheets
            .first()
            .cloned()
            .ok_or_else(|| KeigoError::EmptySheet("シートがありません".into()));
    }
    let idx = select("シートを選択", sheets, 0)?;
    Ok(sheets[idx].clone())
}

/// テキスト列を選択（検出済みの列を初期選択にする）
pub fn select_text_column(table: &Table, detected: Option<&str>) -> Result<String> {
    let default = detected
        .and_then(|d| table.column_index(d))
        .unwrap_or(0);
    let idx = select("セリフ（テキスト）列を選択", &table.columns, default)?;
    Ok(table.columns[idx].clone())
}

/// フィルタ列と値を選択（使わない場合はNone）
pub fn select_filter(table: &Table) -> Result<Option<RowFilter>> {
    let mut columns = vec![NO_FILTER.to_string()];
    columns.extend(table.columns.iter().cloned());

    let idx = select("フィルタ対象の列を選択（任意）", &columns, 0)?;
    if idx == 0 {
        return Ok(None);
    }
    let column = columns[idx].clone();

    let mut values = vec![NO_VALUE.to_string()];
    values.extend(table.unique_values(&column)?);

    let idx = select("値を選択（任意）", &values, 0)?;
    if idx == 0 {
        return Ok(None);
    }

    Ok(Some(RowFilter::new(column, values[idx].clone())))
}
