//! Keigo Common Library
//!
//! 敬語判定のコア。ルールストア・マッチャー・分類器・表集計を提供する。
//! ファイル入出力やログ出力は行わない（CLI側の責務）。

pub mod category;
pub mod classifier;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod table;

pub use category::Category;
pub use classifier::{classify, classify_cell, ClassificationResult, Classifier, HIT_SEPARATOR};
pub use error::{Error, Result};
pub use matcher::{find_all, MatchHit};
pub use rules::{PatternRule, RuleStore};
pub use table::{
    classify_table, classify_table_with, CellValue, ClassifiedRow, ResultSet, Row, RowFilter,
    Table, DEFAULT_TEXT_COLUMNS, RESULT_COLUMNS,
};
