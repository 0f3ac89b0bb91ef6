//! 端末表示
//!
//! 表のプレビュー、判定結果の要約、パターン一覧を整形して出力する。

use keigo_common::{Category, CellValue, ClassificationResult, ResultSet, RuleStore, Table};

const MAX_CELL_CHARS: usize = 30;

/// 長いセルを省略表示
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut s: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    s.push('…');
    s
}

fn format_row(cells: &[CellValue]) -> String {
    cells
        .iter()
        .map(|c| truncate(&c.as_text().replace('\n', " "), MAX_CELL_CHARS))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// 表の先頭n行を表示
pub fn print_table_preview(table: &Table, n: usize) {
    println!("  {}", table.columns.join(" | "));
    for row in table.rows.iter().take(n) {
        println!("  {}", format_row(row.cells()));
    }
    if table.len() > n {
        println!("  …（他 {} 行）", table.len() - n);
    }
}

/// 判定完了の要約
pub fn summary_line(result_set: &ResultSet) -> String {
    let (total, keigo) = result_set.summary();
    format!("判定完了：全行 {} 件 / 敬語を含む行 {} 件", total, keigo)
}

/// 敬語のみの先頭n件を表示
pub fn print_keigo_preview(result_set: &ResultSet, n: usize) {
    if result_set.keigo_only.is_empty() {
        println!("  （敬語を含む行はありません）");
        return;
    }
    println!("  {}", result_set.columns.join(" | "));
    for row in result_set.keigo_only.iter().take(n) {
        println!("  {}", format_row(&row.cells()));
    }
}

/// カテゴリ別ヒット総数
pub fn print_category_totals(result_set: &ResultSet) {
    for (category, total) in result_set.category_totals() {
        println!("  {}: {}件", category, total);
    }
}

/// 1テキストの判定結果を表示
pub fn print_classification(text: &str, result: &ClassificationResult) {
    let verdict = if result.is_keigo { "敬語あり" } else { "敬語なし" };
    println!("「{}」 → {}", text, verdict);
    for category in Category::ALL {
        let count = result.count(category);
        if count > 0 {
            println!("  {} {}件: {}", category, count, result.joined_hits(category));
        }
    }
}

/// パターン一覧を表示
pub fn print_rules(store: &RuleStore) {
    for (category, rules) in store.categories() {
        println!("{} ({}件)", category, rules.len());
        for (i, rule) in rules.iter().enumerate() {
            println!("  {:>2}) {}", i + 1, rule.source());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("ありがとう", 10), "ありがとう");
        assert_eq!(truncate("ありがとうございます", 5), "ありがと…");
    }

    #[test]
    fn test_format_row() {
        let cells = vec![
            CellValue::Text("A".into()),
            CellValue::Number(2.0),
            CellValue::Text("一行目\n二行目".into()),
        ];
        assert_eq!(format_row(&cells), "A | 2 | 一行目 二行目");
    }

    #[test]
    fn test_summary_line() {
        let result_set = ResultSet::default();
        assert_eq!(summary_line(&result_set), "判定完了：全行 0 件 / 敬語を含む行 0 件");
    }
}
