use crate::cli::OutputFormat;
use crate::error::{KeigoError, Result};
use keigo_common::DEFAULT_TEXT_COLUMNS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// テキスト列の候補（先頭から順に探す）
    pub text_column_candidates: Vec<String>,
    /// 常に適用する追加パターンファイル（JSON）
    pub patterns_file: Option<PathBuf>,
    /// `-f` 省略時の出力形式
    pub default_format: OutputFormat,
    /// プレビュー表示の行数
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 既存の設定ファイルを読まずに初期値で上書きする
    pub fn reset() -> Result<Self> {
        Self::reset_to(&Self::config_path()?)
    }

    pub fn reset_to(config_path: &Path) -> Result<Self> {
        let config = Self::default_config();
        config.save_to(config_path)?;
        tracing::debug!(path = %config_path.display(), "設定を初期化しました");
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KeigoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("keigo-extract").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            text_column_candidates: DEFAULT_TEXT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            patterns_file: None,
            default_format: OutputFormat::Both,
            preview_rows: 20,
        }
    }

    /// テキスト列候補を追加（既にあれば何もしない）
    pub fn add_text_column(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.text_column_candidates.iter().any(|c| c == name) {
            return false;
        }
        self.text_column_candidates.push(name.to_string());
        true
    }
}
