//! 追加パターンの取り込み
//!
//! カテゴリごとの改行区切りテキストをルールストアに追加する。
//! 行頭・行末の空白は削除し、空行は無視する。
//!
//! 1行ずつ独立に検証・追加する。途中の行が不正でも、それまでに
//! 追加した行は取り消さず、後続の行の追加も続ける。

use crate::error::Result;
use keigo_common::{Category, RuleStore};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 追加パターン（カテゴリごとの改行区切りテキスト）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPatterns {
    /// 尊敬語
    pub respect: String,
    /// 謙譲語
    pub humble: String,
    /// 丁寧語（文末）
    pub polite: String,
    /// 美化語
    pub beautifier: String,
}

impl ExtraPatterns {
    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let patterns: Self = serde_json::from_str(json)?;
        Ok(patterns)
    }

    pub fn text(&self, category: Category) -> &str {
        match category {
            Category::Respectful => &self.respect,
            Category::Humble => &self.humble,
            Category::Polite => &self.polite,
            Category::Beautifying => &self.beautifier,
        }
    }

    /// (カテゴリ, パターン) を固定順で列挙
    pub fn entries(&self) -> Vec<(Category, &str)> {
        Category::ALL
            .iter()
            .flat_map(|c| split_lines(self.text(*c)).into_iter().map(move |p| (*c, p)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// 取り込み結果
#[derive(Debug, Default)]
pub struct IntakeReport {
    /// 追加できた件数
    pub applied: usize,
    /// 追加できなかった行のエラー
    pub errors: Vec<keigo_common::Error>,
}

impl IntakeReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// 最初のエラーを返す（全件成功なら追加件数）
    pub fn into_result(self) -> Result<usize> {
        match self.errors.into_iter().next() {
            Some(e) => Err(e.into()),
            None => Ok(self.applied),
        }
    }
}

/// 改行区切りテキストをパターン行に分解
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}

/// 追加パターンをストアに適用
pub fn apply_extra_patterns(store: &mut RuleStore, extra: &ExtraPatterns) -> IntakeReport {
    let mut report = IntakeReport::default();

    for (category, pattern) in extra.entries() {
        match store.add_pattern(category, pattern) {
            Ok(()) => {
                tracing::debug!(%category, pattern, "パターンを追加");
                report.applied += 1;
            }
            Err(e) => {
                tracing::warn!(%category, pattern, error = %e, "パターンを追加できません");
                report.errors.push(e);
            }
        }
    }

    report
}

/// 組み込みパターンに追加パターンファイルを順に適用したストアを作る
///
/// 不正な行があれば全件を警告した上で最初のエラーを返す。
pub fn load_rule_store(files: &[&Path]) -> Result<RuleStore> {
    let mut store = RuleStore::builtin();

    for path in files {
        let extra = ExtraPatterns::from_file(path)?;
        let report = apply_extra_patterns(&mut store, &extra);
        for e in &report.errors {
            eprintln!("⚠ {}", e);
        }
        let applied = report.into_result()?;
        tracing::info!(path = %path.display(), applied, "追加パターンを適用しました");
    }

    Ok(store)
}
