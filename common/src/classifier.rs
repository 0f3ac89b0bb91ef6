//! 敬語分類器
//!
//! テキスト1件に対して4カテゴリ全てのマッチャーを実行し、
//! 件数・ヒット文字列・敬語判定をまとめる。

use crate::category::Category;
use crate::error::Result;
use crate::matcher::find_all;
use crate::rules::RuleStore;
use crate::table::CellValue;

/// ヒット文字列の区切り（全角読点）
pub const HIT_SEPARATOR: &str = "、";

/// 1テキストの分類結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub is_keigo: bool,
    /// カテゴリ順（Category::ALL）のヒット一覧
    hits: [Vec<String>; 4],
}

impl ClassificationResult {
    /// データなし（空欄・非テキスト）の結果
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_hits(hits: [Vec<String>; 4]) -> Self {
        let is_keigo = hits.iter().any(|h| !h.is_empty());
        Self { is_keigo, hits }
    }

    pub fn count(&self, category: Category) -> usize {
        self.hits[category.index()].len()
    }

    pub fn hits(&self, category: Category) -> &[String] {
        &self.hits[category.index()]
    }

    /// 区切り文字で連結したヒット文字列
    pub fn joined_hits(&self, category: Category) -> String {
        self.hits[category.index()].join(HIT_SEPARATOR)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|h| h.len()).sum()
    }

    /// ヒットのあったカテゴリ
    pub fn matched_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| self.count(*c) > 0)
            .collect()
    }
}

/// テキストを分類する
pub fn classify(store: &RuleStore, text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return ClassificationResult::empty();
    }

    let hits = Category::ALL.map(|c| {
        find_all(store.rules(c), text)
            .into_iter()
            .map(|h| h.text)
            .collect::<Vec<_>>()
    });

    ClassificationResult::from_hits(hits)
}

/// セル値を分類する（テキスト以外はデータなし扱い）
pub fn classify_cell(store: &RuleStore, value: &CellValue) -> ClassificationResult {
    match value {
        CellValue::Text(text) => classify(store, text),
        _ => ClassificationResult::empty(),
    }
}

/// ルールストアを保持する分類器
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    store: RuleStore,
}

impl Classifier {
    pub fn new(store: RuleStore) -> Self {
        Self { store }
    }

    /// 組み込みパターンのみの分類器
    pub fn builtin() -> Self {
        Self::new(RuleStore::builtin())
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        classify(&self.store, text)
    }

    pub fn add_pattern(&mut self, category: Category, pattern: &str) -> Result<()> {
        self.store.add_pattern(category, pattern)
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RuleStore {
        &mut self.store
    }
}
