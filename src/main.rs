use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use keigo_common::{classify, classify_table_with, RowFilter, RuleStore};
use keigo_extract::{cli, config, display, error, export, patterns, prompt, reader};
use cli::{Cli, Commands};
use config::Config;
use error::{KeigoError, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 設定の追加パターン → 引数の追加パターンの順に適用
fn build_rule_store(config: &Config, extra: Option<&Path>) -> Result<RuleStore> {
    let files: Vec<&Path> = config
        .patterns_file
        .as_deref()
        .into_iter()
        .chain(extra)
        .collect();
    patterns::load_rule_store(&files)
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify {
            input,
            sheet,
            column,
            filter_column,
            filter_value,
            patterns,
            output,
            format,
            interactive,
            preview,
        } => {
            println!("🗣️ keigo-extract - 敬語判定\n");

            let config = Config::load()?;
            let format = format.unwrap_or(config.default_format);
            let store = build_rule_store(&config, patterns.as_deref())?;
            tracing::debug!(rules = store.len(), "ルールストアを構築しました");

            // 1. 読み込み
            println!("[1/3] ファイルを読み込み中...");
            let sheet = match sheet {
                Some(s) => Some(s),
                None if interactive => Some(prompt::select_sheet(&reader::list_sheets(&input)?)?),
                None => None,
            };
            let table = reader::read_table(&input, sheet.as_deref())?;
            println!("✔ {}行 × {}列を読み込み\n", table.len(), table.columns.len());

            let detected = table
                .find_text_column(&config.text_column_candidates)
                .map(|s| s.to_string());
            let text_column = match column {
                Some(c) => c,
                None if interactive => prompt::select_text_column(&table, detected.as_deref())?,
                None => detected
                    .ok_or_else(|| KeigoError::TextColumnUndetermined(table.columns.join(", ")))?,
            };
            let filter = match (filter_column, filter_value) {
                (Some(c), Some(v)) => Some(RowFilter::new(c, v)),
                _ if interactive => prompt::select_filter(&table)?,
                _ => None,
            };

            // 2. 判定
            match &filter {
                Some(f) => println!(
                    "[2/3] 敬語判定中...（列: {} / フィルタ: {} = {}）",
                    text_column, f.column, f.value
                ),
                None => println!("[2/3] 敬語判定中...（列: {}）", text_column),
            }
            let pb = ProgressBar::new(table.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len}") {
                pb.set_style(style);
            }
            let result_set =
                classify_table_with(&store, &table, &text_column, filter.as_ref(), || pb.inc(1))?;
            pb.finish_and_clear();
            println!("✔ {}", display::summary_line(&result_set));
            display::print_category_totals(&result_set);

            let preview_rows = preview.unwrap_or(config.preview_rows);
            if preview_rows > 0 {
                println!("\n敬語のみプレビュー（先頭{}件）", preview_rows);
                display::print_keigo_preview(&result_set, preview_rows);
            }
            println!();

            // 3. 出力
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| default_output_dir(&input));
            export::export_results(&result_set, format, &output)?;

            println!("\n✅ 完了");
        }

        Commands::Check { texts, patterns } => {
            let config = Config::load()?;
            let store = build_rule_store(&config, patterns.as_deref())?;
            for text in &texts {
                display::print_classification(text, &classify(&store, text));
            }
        }

        Commands::Inspect { input, sheet, rows } => {
            println!("📄 keigo-extract - ファイル確認\n");

            let config = Config::load()?;

            let sheets = reader::list_sheets(&input)?;
            println!("シート: {}", sheets.join(", "));

            let table = reader::read_table(&input, sheet.as_deref())?;
            println!("列: {}", table.columns.join(", "));
            match table.find_text_column(&config.text_column_candidates) {
                Some(c) => println!("テキスト列（自動判定）: {}", c),
                None => println!("テキスト列（自動判定）: 見つかりません（--column で指定してください）"),
            }
            println!("\nプレビュー（先頭{}行）", rows);
            display::print_table_preview(&table, rows);
        }

        Commands::Patterns { patterns } => {
            let config = Config::load()?;
            let store = build_rule_store(&config, patterns.as_deref())?;
            display::print_rules(&store);
        }

        Commands::Config {
            add_text_column,
            set_patterns,
            set_format,
            reset,
            show,
        } => {
            // リセット時は既存ファイルを読まない
            let mut config = if reset {
                let config = Config::reset()?;
                println!("✔ 設定を初期化しました");
                config
            } else {
                Config::load()?
            };
            let mut changed = false;

            if let Some(name) = add_text_column {
                if config.add_text_column(&name) {
                    println!("✔ テキスト列の候補に追加しました: {}", name);
                    changed = true;
                } else {
                    println!("テキスト列の候補に既に含まれています: {}", name);
                }
            }

            if let Some(path) = set_patterns {
                // 読めないファイルは設定しない
                let extra = patterns::ExtraPatterns::from_file(&path)?;
                let mut probe = RuleStore::builtin();
                patterns::apply_extra_patterns(&mut probe, &extra).into_result()?;
                config.patterns_file = Some(path.canonicalize().unwrap_or(path));
                println!("✔ 追加パターンファイルを設定しました");
                changed = true;
            }

            if let Some(format) = set_format {
                config.default_format = format;
                println!("✔ 既定の出力形式を設定しました: {}", format);
                changed = true;
            }

            if changed {
                config.save()?;
            }

            if show || !(changed || reset) {
                println!("設定: {}", Config::config_path()?.display());
                println!("  テキスト列候補: {}", config.text_column_candidates.join(", "));
                println!(
                    "  追加パターン: {}",
                    config
                        .patterns_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  既定の出力形式: {}", config.default_format);
                println!("  プレビュー件数: {}", config.preview_rows);
            }
        }
    }

    Ok(())
}
