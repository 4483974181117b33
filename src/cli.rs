// src/cli.rs
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Output format options for the tool.
///
/// Parsing never fails: an unrecognized token falls back to `Table`, the
/// process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "xml" => Self::Xml,
            _ => Self::Table,
        })
    }
}

/// ソートキー。常に降順。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ReleaseYear,
    Price,
}

impl SortKey {
    /// Case-insensitive match against the accepted tokens; anything else
    /// means "no sort".
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "releaseyear" => Some(Self::ReleaseYear),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "car_report",
    version = crate::VERSION,
    about = "CSV/XML 車両データの結合・フィルタ・整形ツール"
)]
pub struct Args {
    /// CSV 入力ファイル (brand, release date)
    #[arg(long)]
    pub csv: PathBuf,

    /// XML 入力ファイル (type, prices)
    #[arg(long)]
    pub xml: PathBuf,

    /// ソートキー (releaseYear | price, 降順)
    #[arg(long)]
    pub sort: Option<String>,

    /// ブランド名でフィルタ (大文字小文字を無視)
    #[arg(long)]
    pub filter_brand: Option<String>,

    /// USD 価格でフィルタ (完全一致)
    #[arg(long)]
    pub filter_price: Option<f64>,

    /// 発売日でフィルタ (YYYY-MM-DD または YEAR,DAY,MONTH)
    #[arg(long)]
    pub filter_date: Option<String>,

    /// 出力フォーマット (table | json | xml)
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// 出力先ファイル（未指定は標準出力）
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_falls_back_to_table() {
        for input in ["table", "TABLE", "csv", "yaml", ""] {
            assert_eq!(input.parse::<OutputFormat>(), Ok(OutputFormat::Table));
        }
    }

    #[test]
    fn known_formats_parse_case_insensitively() {
        assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Xml".parse::<OutputFormat>(), Ok(OutputFormat::Xml));
    }

    #[test]
    fn sort_key_tokens_match_case_insensitively() {
        assert_eq!(SortKey::from_token("releaseYear"), Some(SortKey::ReleaseYear));
        assert_eq!(SortKey::from_token("RELEASEYEAR"), Some(SortKey::ReleaseYear));
        assert_eq!(SortKey::from_token(" price "), Some(SortKey::Price));
    }

    #[test]
    fn unknown_sort_token_means_no_sort() {
        assert_eq!(SortKey::from_token("brand"), None);
        assert_eq!(SortKey::from_token(""), None);
    }
}
