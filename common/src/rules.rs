//! ルールストア
//!
//! カテゴリごとのパターン（正規表現）リストを保持する。
//! 組み込みパターンで初期化し、実行時に追加できる（削除は不可）。
//!
//! ## 並行性
//! `add_pattern` は `&mut self` を取るため、同一ストアへの読み書きは
//! 借用規則で直列化される。スレッド間で共有する場合は呼び出し側で
//! `Arc<RwLock<RuleStore>>` 等に包むこと（コア側ではロックしない）。

use crate::category::Category;
use crate::error::{Error, Result};
use regex::Regex;

/// 伸ばし・笑い・空白・閉じ記号をゆるく許可する語尾
pub const TAIL: &str = r"[ー〜~ｗ笑]*[\s　]*[。．.!！?？、,：:；;…‥」』）\)\]】〉》]*";

/// 尊敬語パターン
pub const RESPECT_WORDS: &[&str] = &[
    r"なさる",
    r"いらっしゃる",
    r"おいでになる",
    r"おっしゃる",
    r"ご覧になる",
    r"召し上がる",
    r"お越しになる",
    r"お帰りになる",
    r"ご存じ(?:だ|です)",
    r"くださる",
    r"お休みになる",
];

/// 謙譲語パターン
pub const HUMBLE_WORDS: &[&str] = &[
    r"いたす",
    r"存じ(?:ます|上げる|上げております)",
    r"申し(?:ます|上げる|上げております)",
    r"拝見(?:します|いたします)",
    r"伺(?:います|いました|わせて)",
    r"差し上げ(?:ます|ました)",
    r"承知(?:しました|いたしました|しております)",
    r"頂(?:きます|けます)",
    r"いただ(?:きます|けます|いております)",
    r"参(?:り|ります)",
];

/// 丁寧語の文末（TAILを後ろに連結して使う）
const POLITE_STEMS: &[&str] = &[
    r"(?:です|ます|でした|でしょう|ません|でございます|ござい(?:ます|ません))(?:か|ね|よ)?",
    r"ください",
];

/// 美化語パターン
pub const BEAUTIFIER_PATTERNS: &[&str] =
    &[r"(?:お|ご)[一-龥ぁ-んァ-ン]{1,6}(?:いたします|します|ください|です)"];

/// 丁寧語パターン（語尾込み）
pub fn polite_patterns() -> Vec<String> {
    POLITE_STEMS
        .iter()
        .map(|stem| format!("{}{}", stem, TAIL))
        .collect()
}

/// 組み込みパターンのソース文字列
pub fn builtin_sources(category: Category) -> Vec<String> {
    match category {
        Category::Respectful => RESPECT_WORDS.iter().map(|s| s.to_string()).collect(),
        Category::Humble => HUMBLE_WORDS.iter().map(|s| s.to_string()).collect(),
        Category::Polite => polite_patterns(),
        Category::Beautifying => BEAUTIFIER_PATTERNS.iter().map(|s| s.to_string()).collect(),
    }
}

lazy_static::lazy_static! {
    // 組み込みはプロセス内で一度だけコンパイルし、ストアにはクローンを渡す
    static ref BUILTIN_RULES: Vec<Vec<PatternRule>> = Category::ALL
        .iter()
        .map(|c| {
            builtin_sources(*c)
                .into_iter()
                .map(|src| PatternRule::new(&src).unwrap())
                .collect()
        })
        .collect();
}

/// コンパイル済みパターン
#[derive(Debug, Clone)]
pub struct PatternRule {
    source: String,
    regex: Regex,
}

impl PatternRule {
    /// パターン文字列をコンパイル
    pub fn new(source: &str) -> std::result::Result<Self, regex::Error> {
        let regex = Regex::new(source)?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// 元のパターン文字列
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// 明示的なキャプチャグループ数（全体マッチは含まない）
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}

/// カテゴリ別ルールストア
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: [Vec<PatternRule>; 4],
}

impl RuleStore {
    /// 組み込みパターンで初期化
    pub fn builtin() -> Self {
        Self {
            rules: [
                BUILTIN_RULES[0].clone(),
                BUILTIN_RULES[1].clone(),
                BUILTIN_RULES[2].clone(),
                BUILTIN_RULES[3].clone(),
            ],
        }
    }

    /// 空のストア
    pub fn empty() -> Self {
        Self {
            rules: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// パターンを追加
    ///
    /// コンパイルに失敗した場合は `Error::InvalidPattern` を返し、
    /// 既存のルールは変更しない。
    pub fn add_pattern(&mut self, category: Category, pattern: &str) -> Result<()> {
        let rule = PatternRule::new(pattern).map_err(|e| Error::InvalidPattern {
            category,
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        self.rules[category.index()].push(rule);
        Ok(())
    }

    /// カテゴリのルール一覧
    pub fn rules(&self, category: Category) -> &[PatternRule] {
        &self.rules[category.index()]
    }

    /// 全カテゴリを固定順で列挙
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[PatternRule])> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.rules(*c)))
    }

    pub fn rule_count(&self, category: Category) -> usize {
        self.rules[category.index()].len()
    }

    /// 全ルール数
    pub fn len(&self) -> usize {
        self.rules.iter().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::builtin()
    }
}
