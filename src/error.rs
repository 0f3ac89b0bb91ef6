use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeigoError {
    #[error(transparent)]
    Common(#[from] keigo_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない入力形式です: {0}（.xlsx/.xls/.ods/.csv/.tsv に対応）")]
    UnsupportedInput(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("シートにデータがありません: {0}")]
    EmptySheet(String),

    #[error("テキスト列を特定できません。--column で指定してください（列: {0}）")]
    TextColumnUndetermined(String),

    #[error("読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, KeigoError>;
