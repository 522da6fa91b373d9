// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;

use crate::options::OutputFormat;
use crate::query::Query;

/// 実行内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// コマンドラインで指定された 1 件のクエリ
    Single(Query),
    /// ファイルから読み込むクエリ列
    Batch(PathBuf),
    /// 組み込みの例題
    Demo,
}

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub mode: Mode,
    #[builder(default)]
    pub format: OutputFormat,
    /// Reject inverted range-sum bounds instead of counting zero matches.
    #[builder(default)]
    pub strict: bool,
}
