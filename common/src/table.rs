//! 表データと集計
//!
//! 任意スキーマの表（列名 + 行）に分類器を適用し、
//! 分類列を末尾に連結した「全行」と「敬語のみ」の2ビューを作る。

use crate::category::Category;
use crate::classifier::{classify_cell, ClassificationResult};
use crate::error::{Error, Result};
use crate::rules::RuleStore;

/// テキスト列の候補（先頭から順に探す）
pub const DEFAULT_TEXT_COLUMNS: &[&str] =
    &["セリフ", "台詞", "text", "発話", "発言", "utterance", "line"];

/// 分類結果として追加される列
pub const RESULT_COLUMNS: [&str; 9] = [
    "isKeigo",
    "respectCount",
    "humbleCount",
    "politeCount",
    "beautifierCount",
    "respectHits",
    "humbleHits",
    "politeHits",
    "beautifierHits",
];

/// セル値
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 文字列として比較・出力するための表現
    ///
    /// 整数値の数値は小数点なしで表す（`3.0` → `"3"`）。
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// 1行（列順に並んだセル）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(pub Vec<CellValue>);

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self(cells)
    }

    /// 範囲外は空セル
    pub fn get(&self, index: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.0.get(index).unwrap_or(&EMPTY)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Into<CellValue>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row(iter.into_iter().map(Into::into).collect())
    }
}

/// 行フィルタ（列の値を文字列比較）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub column: String,
    pub value: String,
}

impl RowFilter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// 表データ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 行を追加（列数に合わせて切り詰め・空セル補完する）
    pub fn push_row(&mut self, mut row: Row) {
        row.0.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列名から位置を取得（重複時は先頭）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 列の存在を確認
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// 候補の中で最初に存在する列名
    pub fn find_text_column<S: AsRef<str>>(&self, candidates: &[S]) -> Option<&str> {
        candidates
            .iter()
            .map(|c| c.as_ref())
            .find_map(|c| self.columns.iter().find(|col| col.as_str() == c))
            .map(|s| s.as_str())
    }

    /// 列の値一覧（空欄除外・重複除去・ソート済み）
    pub fn unique_values(&self, column: &str) -> Result<Vec<String>> {
        let idx = self.require_column(column)?;
        let mut values: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.get(idx))
            .filter(|v| !v.is_empty())
            .map(|v| v.as_text())
            .collect();
        values.sort();
        values.dedup();
        Ok(values)
    }

    /// フィルタに一致する行だけを残した表
    pub fn filter(&self, filter: &RowFilter) -> Result<Table> {
        let idx = self.require_column(&filter.column)?;
        Ok(Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r.get(idx).as_text() == filter.value)
                .cloned()
                .collect(),
        })
    }

    /// 先頭n行
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// 分類済みの行
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    pub row: Row,
    pub result: ClassificationResult,
}

impl ClassifiedRow {
    pub fn is_keigo(&self) -> bool {
        self.result.is_keigo
    }

    /// 元の列 + 分類列（RESULT_COLUMNSの順）
    pub fn cells(&self) -> Vec<CellValue> {
        let mut cells = self.row.0.clone();
        cells.push(CellValue::Bool(self.result.is_keigo));
        for c in Category::ALL {
            cells.push(CellValue::Number(self.result.count(c) as f64));
        }
        for c in Category::ALL {
            cells.push(CellValue::Text(self.result.joined_hits(c)));
        }
        cells
    }
}

/// 集計結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// 出力列（元の列 + RESULT_COLUMNS）
    pub columns: Vec<String>,
    pub all: Vec<ClassifiedRow>,
    pub keigo_only: Vec<ClassifiedRow>,
}

impl ResultSet {
    /// (全行数, 敬語を含む行数)
    pub fn summary(&self) -> (usize, usize) {
        (self.all.len(), self.keigo_only.len())
    }

    /// カテゴリ別のヒット総数
    pub fn category_totals(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.all.iter().map(|r| r.result.count(*c)).sum()))
            .collect()
    }
}

/// 表全体を分類する
pub fn classify_table(
    store: &RuleStore,
    table: &Table,
    text_column: &str,
    filter: Option<&RowFilter>,
) -> Result<ResultSet> {
    classify_table_with(store, table, text_column, filter, || {})
}

/// 表全体を分類する（1行ごとにコールバックを呼ぶ）
///
/// 列の存在確認は分類前に行い、失敗時は1行も分類しない。
/// フィルタは分類より前に適用する。
pub fn classify_table_with<F>(
    store: &RuleStore,
    table: &Table,
    text_column: &str,
    filter: Option<&RowFilter>,
    mut on_row: F,
) -> Result<ResultSet>
where
    F: FnMut(),
{
    let text_idx = table.require_column(text_column)?;
    let filter = match filter {
        Some(f) => Some((table.require_column(&f.column)?, f.value.as_str())),
        None => None,
    };

    let mut columns = table.columns.clone();
    columns.extend(RESULT_COLUMNS.iter().map(|c| c.to_string()));

    let all: Vec<ClassifiedRow> = table
        .rows
        .iter()
        .filter(|row| match filter {
            Some((idx, value)) => row.get(idx).as_text() == value,
            None => true,
        })
        .map(|row| {
            let result = classify_cell(store, row.get(text_idx));
            on_row();
            ClassifiedRow {
                row: row.clone(),
                result,
            }
        })
        .collect();

    let keigo_only = all.iter().filter(|r| r.is_keigo()).cloned().collect();

    Ok(ResultSet {
        columns,
        all,
        keigo_only,
    })
}
