//! CSV生成（敬語を含む行のみ）
//!
//! 表計算ソフトでそのまま開けるよう UTF-8 BOM 付きで出力する。

use crate::error::Result;
use keigo_common::ResultSet;
use std::io::Write;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn generate_csv(result_set: &ResultSet, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(result_set, file)?;
    tracing::debug!(
        path = %output_path.display(),
        rows = result_set.keigo_only.len(),
        "CSVを書き出しました"
    );
    Ok(())
}

/// 任意の書き込み先へ出力
pub fn write_csv<W: Write>(result_set: &ResultSet, mut out: W) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&result_set.columns)?;
    for row in &result_set.keigo_only {
        writer.write_record(row.cells().iter().map(|c| c.as_text()))?;
    }
    writer.flush()?;
    Ok(())
}
