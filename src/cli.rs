use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keigo-extract")]
#[command(about = "台詞データから敬語を含む発話を抽出するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 表ファイルを敬語判定してExcel/CSVを出力
    Classify {
        /// 入力ファイル（.xlsx/.xls/.ods/.csv/.tsv）
        #[arg(required = true)]
        input: PathBuf,

        /// シート名（省略時は先頭シート）
        #[arg(short, long)]
        sheet: Option<String>,

        /// テキスト（セリフ）列（省略時は候補から自動判定）
        #[arg(short, long)]
        column: Option<String>,

        /// フィルタ対象の列（話者など）
        #[arg(long, requires = "filter_value")]
        filter_column: Option<String>,

        /// フィルタ値
        #[arg(long, requires = "filter_column")]
        filter_value: Option<String>,

        /// 追加パターンファイル（JSON）
        #[arg(short, long)]
        patterns: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ（デフォルト: 入力ファイルと同じ場所）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (xlsx/csv/both、省略時は設定値)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// シート・列・フィルタを対話的に選択
        #[arg(short, long)]
        interactive: bool,

        /// 敬語のみプレビューの表示件数（省略時は設定値）
        #[arg(long)]
        preview: Option<usize>,
    },

    /// テキストを直接判定して結果を表示
    Check {
        /// 判定するテキスト
        #[arg(required = true)]
        texts: Vec<String>,

        /// 追加パターンファイル（JSON）
        #[arg(short, long)]
        patterns: Option<PathBuf>,
    },

    /// 表ファイルのシート・列・先頭行を表示
    Inspect {
        /// 入力ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// シート名（省略時は先頭シート）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 表示する行数
        #[arg(short = 'n', long, default_value = "5")]
        rows: usize,
    },

    /// 現在のパターン一覧を表示
    Patterns {
        /// 追加パターンファイル（JSON）
        #[arg(short, long)]
        patterns: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// テキスト列の候補を追加
        #[arg(long)]
        add_text_column: Option<String>,

        /// 常に適用する追加パターンファイルを設定
        #[arg(long)]
        set_patterns: Option<PathBuf>,

        /// `-f` 省略時の出力形式を設定
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn writes_xlsx(&self) -> bool {
        matches!(self, OutputFormat::Xlsx | OutputFormat::Both)
    }

    pub fn writes_csv(&self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use xlsx, csv, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xlsx => write!(f, "xlsx"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
