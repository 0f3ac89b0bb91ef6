//! Excel生成
//!
//! シート `classified_all`（全行）と `keigo_only`（敬語を含む行）を出力する。

use crate::error::{KeigoError, Result};
use keigo_common::{CellValue, ClassifiedRow, ResultSet};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use std::path::Path;

pub const SHEET_ALL: &str = "classified_all";
pub const SHEET_KEIGO: &str = "keigo_only";

pub fn generate_excel(result_set: &ResultSet, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(result_set)?;
    std::fs::write(output_path, buffer)?;
    tracing::debug!(
        path = %output_path.display(),
        rows = result_set.all.len(),
        "Excelを書き出しました"
    );
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(result_set: &ResultSet) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let worksheet = workbook.add_worksheet();
    write_sheet(worksheet, SHEET_ALL, &result_set.columns, &result_set.all, &header_format)?;

    let worksheet = workbook.add_worksheet();
    write_sheet(
        worksheet,
        SHEET_KEIGO,
        &result_set.columns,
        &result_set.keigo_only,
        &header_format,
    )?;

    workbook
        .save_to_buffer()
        .map_err(|e| KeigoError::ExcelGeneration(format!("Excel保存エラー: {}", e)))
}

fn write_sheet(
    worksheet: &mut Worksheet,
    name: &str,
    columns: &[String],
    rows: &[ClassifiedRow],
    header_format: &Format,
) -> Result<()> {
    worksheet
        .set_name(name)
        .map_err(|e| KeigoError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    for (col, title) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, title, header_format)
            .map_err(|e| KeigoError::ExcelGeneration(format!("ヘッダー書き込みエラー: {}", e)))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let row_idx = (i + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            let col = col as u16;
            let written = match cell {
                CellValue::Empty => continue,
                CellValue::Text(s) => worksheet.write_string(row_idx, col, s),
                CellValue::Number(n) => worksheet.write_number(row_idx, col, *n),
                CellValue::Bool(b) => worksheet.write_boolean(row_idx, col, *b),
            };
            written
                .map_err(|e| KeigoError::ExcelGeneration(format!("セル書き込みエラー: {}", e)))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| KeigoError::ExcelGeneration(format!("ウィンドウ枠固定エラー: {}", e)))?;

    Ok(())
}
