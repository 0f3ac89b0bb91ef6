//! 表ファイル読み込みの統合テスト

use keigo_common::CellValue;
use keigo_extract::error::KeigoError;
use keigo_extract::reader;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

fn write_script_xlsx(path: &Path) {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("第1話").unwrap();
    sheet.write_string(0, 0, "話者").unwrap();
    sheet.write_string(0, 1, "セリフ").unwrap();
    sheet.write_string(0, 3, "No").unwrap();
    sheet.write_string(1, 0, "執事").unwrap();
    sheet.write_string(1, 1, "ようこそいらっしゃいました").unwrap();
    sheet.write_number(1, 3, 1.0).unwrap();
    sheet.write_string(2, 0, "少年").unwrap();
    sheet.write_number(2, 1, 42.0).unwrap();
    sheet.write_number(2, 3, 2.0).unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("第2話").unwrap();
    sheet.write_string(0, 0, "text").unwrap();
    sheet.write_string(1, 0, "おっしゃる通りです").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_list_sheets_xlsx() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("script.xlsx");
    write_script_xlsx(&path);

    let sheets = reader::list_sheets(&path).unwrap();
    assert_eq!(sheets, vec!["第1話", "第2話"]);
}

#[test]
fn test_read_first_sheet_by_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("script.xlsx");
    write_script_xlsx(&path);

    let table = reader::read_table(&path, None).unwrap();
    assert_eq!(table.columns, vec!["話者", "セリフ", "Unnamed: 2", "No"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows[0].get(1),
        &CellValue::Text("ようこそいらっしゃいました".into())
    );
    assert_eq!(table.rows[1].get(1), &CellValue::Number(42.0));
    assert_eq!(table.rows[1].get(2), &CellValue::Empty);
}

#[test]
fn test_read_named_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("script.xlsx");
    write_script_xlsx(&path);

    let table = reader::read_table(&path, Some("第2話")).unwrap();
    assert_eq!(table.columns, vec!["text"]);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_read_missing_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("script.xlsx");
    write_script_xlsx(&path);

    let result = reader::read_table(&path, Some("第3話"));
    assert!(matches!(result, Err(KeigoError::SheetNotFound(ref s)) if s == "第3話"));
}

#[test]
fn test_read_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ep01.csv");
    std::fs::write(&path, "\u{feff}話者,セリフ\n執事,\"かしこまりました、伺います。\"\n少年,\n").unwrap();

    assert_eq!(reader::list_sheets(&path).unwrap(), vec!["ep01"]);

    let table = reader::read_table(&path, None).unwrap();
    assert_eq!(table.columns, vec!["話者", "セリフ"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows[0].get(1),
        &CellValue::Text("かしこまりました、伺います。".into())
    );
    assert_eq!(table.rows[1].get(1), &CellValue::Empty);
}

#[test]
fn test_read_tsv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ep02.tsv");
    std::fs::write(&path, "line\tspeaker\nどうぞお入りください\tA\n").unwrap();

    let table = reader::read_table(&path, None).unwrap();
    assert_eq!(table.columns, vec!["line", "speaker"]);
    assert_eq!(table.rows[0].get(1), &CellValue::Text("A".into()));
}
