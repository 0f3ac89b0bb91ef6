//! keigo-extract
//!
//! 台詞データ（Excel/CSV）を読み込み、敬語を含む発話を判定・抽出する。
//! 判定コアは `keigo_common`、本クレートは入出力とCLIを担当する。

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod patterns;
pub mod prompt;
pub mod reader;

pub use keigo_common;
