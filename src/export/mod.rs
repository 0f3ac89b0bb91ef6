pub mod csv_writer;
pub mod excel;

use crate::cli::OutputFormat;
use crate::error::Result;
use keigo_common::ResultSet;
use std::path::{Path, PathBuf};

/// Excel出力のデフォルトファイル名
pub const DEFAULT_XLSX_NAME: &str = "keigo_result.xlsx";
/// CSV出力（敬語のみ）のデフォルトファイル名
pub const DEFAULT_CSV_NAME: &str = "keigo_only.csv";

fn is_directory_target(output: &Path) -> bool {
    output.is_dir() || output.extension().is_none()
}

fn output_path_for_format(output: &Path, default_name: &str) -> PathBuf {
    if is_directory_target(output) {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if is_directory_target(output) {
        (output.join(DEFAULT_XLSX_NAME), output.join(DEFAULT_CSV_NAME))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("keigo_result");
        (
            parent.join(format!("{}.xlsx", stem)),
            parent.join(format!("{}.csv", stem)),
        )
    }
}

/// 出力先パスを決める（xlsx, csv の順）
pub fn resolve_output_paths(
    format: OutputFormat,
    output: &Path,
) -> (Option<PathBuf>, Option<PathBuf>) {
    match format {
        OutputFormat::Xlsx => (Some(output_path_for_format(output, DEFAULT_XLSX_NAME)), None),
        OutputFormat::Csv => (None, Some(output_path_for_format(output, DEFAULT_CSV_NAME))),
        OutputFormat::Both => {
            let (xlsx, csv) = output_paths_for_both(output);
            (Some(xlsx), Some(csv))
        }
    }
}

/// 判定結果を出力し、書き出したファイルを返す
pub fn export_results(
    result_set: &ResultSet,
    format: OutputFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let (xlsx_path, csv_path) = resolve_output_paths(format, output);
    for path in xlsx_path.iter().chain(csv_path.iter()) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut written = Vec::new();

    if let Some(path) = xlsx_path {
        println!("- Excelを生成中...");
        excel::generate_excel(result_set, &path)?;
        println!("✔ Excel出力: {}", path.display());
        written.push(path);
    }

    if let Some(path) = csv_path {
        println!("- CSV（敬語のみ）を生成中...");
        csv_writer::generate_csv(result_set, &path)?;
        println!("✔ CSV出力: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
