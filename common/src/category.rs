//! 敬語カテゴリ
//!
//! 尊敬語・謙譲語・丁寧語・美化語の4分類。並び順は固定で、
//! 出力列やヒットの報告順もこの順に従う。

use serde::{Deserialize, Serialize};

/// 敬語カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 尊敬語
    #[serde(rename = "respect")]
    Respectful,
    /// 謙譲語
    #[serde(rename = "humble")]
    Humble,
    /// 丁寧語
    #[serde(rename = "polite")]
    Polite,
    /// 美化語
    #[serde(rename = "beautifier")]
    Beautifying,
}

impl Category {
    /// 固定の列挙順
    pub const ALL: [Category; 4] = [
        Category::Respectful,
        Category::Humble,
        Category::Polite,
        Category::Beautifying,
    ];

    /// 出力列名のプレフィックス（`respectCount` など）
    pub fn key(&self) -> &'static str {
        match self {
            Category::Respectful => "respect",
            Category::Humble => "humble",
            Category::Polite => "polite",
            Category::Beautifying => "beautifier",
        }
    }

    /// 日本語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Respectful => "尊敬語",
            Category::Humble => "謙譲語",
            Category::Polite => "丁寧語",
            Category::Beautifying => "美化語",
        }
    }

    /// 件数列の名前
    pub fn count_column(&self) -> String {
        format!("{}Count", self.key())
    }

    /// ヒット列の名前
    pub fn hits_column(&self) -> String {
        format!("{}Hits", self.key())
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Respectful => 0,
            Category::Humble => 1,
            Category::Polite => 2,
            Category::Beautifying => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "respect" | "respectful" | "尊敬" | "尊敬語" => Ok(Category::Respectful),
            "humble" | "謙譲" | "謙譲語" => Ok(Category::Humble),
            "polite" | "丁寧" | "丁寧語" => Ok(Category::Polite),
            "beautifier" | "beautifying" | "美化" | "美化語" => Ok(Category::Beautifying),
            _ => Err(format!(
                "Unknown category: {}. Use respect, humble, polite, or beautifier",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["respect", "humble", "polite", "beautifier"]);
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_column_names() {
        assert_eq!(Category::Respectful.count_column(), "respectCount");
        assert_eq!(Category::Beautifying.hits_column(), "beautifierHits");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("polite".parse::<Category>(), Ok(Category::Polite));
        assert_eq!("謙譲語".parse::<Category>(), Ok(Category::Humble));
        assert_eq!(" Respectful ".parse::<Category>(), Ok(Category::Respectful));
        assert_eq!("美化".parse::<Category>(), Ok(Category::Beautifying));
        assert!("casual".parse::<Category>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Polite), "丁寧語");
    }
}
