//! エラー型定義

use crate::category::Category;
use thiserror::Error;

/// コアのエラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern for {category}: `{pattern}` ({reason})")]
    InvalidPattern {
        category: Category,
        pattern: String,
        reason: String,
    },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_pattern() {
        let error = Error::InvalidPattern {
            category: Category::Polite,
            pattern: "(です".to_string(),
            reason: "unclosed group".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("丁寧語"));
        assert!(display.contains("(です"));
        assert!(display.contains("unclosed group"));
    }

    #[test]
    fn test_error_display_column_not_found() {
        let error = Error::ColumnNotFound("セリフ".to_string());
        assert_eq!(format!("{}", error), "Column not found: セリフ");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::ColumnNotFound("話者".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("ColumnNotFound"));
        assert!(debug.contains("話者"));
    }
}
