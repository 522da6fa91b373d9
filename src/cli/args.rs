// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use super::{parsers::ValueList, value_enum::CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "range_sums",
    version = crate::VERSION,
    about = "累積和による区間和クエリ (区間和カウント/部分和K/ピボット)"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", global = true, help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 下限が上限を超える区間指定をエラーとして扱う（既定では 0 件として扱う）
    #[arg(long, global = true, help_heading = "動作")]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 和が [lower, upper] に収まる連続区間の個数を数える
    RangeSum {
        /// 整数列（カンマ区切り, 例: -2,5,-1）
        #[arg(long, allow_hyphen_values = true)]
        values: ValueList,

        /// 区間和の下限（含む）
        #[arg(long, allow_hyphen_values = true)]
        lower: i64,

        /// 区間和の上限（含む）
        #[arg(long, allow_hyphen_values = true)]
        upper: i64,
    },

    /// 和がちょうど K になる連続区間の個数を数える
    SubarraySum {
        /// 整数列（カンマ区切り）
        #[arg(long, allow_hyphen_values = true)]
        values: ValueList,

        /// 目標の和
        #[arg(short, long, allow_hyphen_values = true)]
        k: i64,
    },

    /// 左右の和が等しくなる最も左の添字を求める（なければ -1）
    PivotIndex {
        /// 整数列（カンマ区切り）
        #[arg(long, allow_hyphen_values = true)]
        values: ValueList,
    },

    /// JSON/YAML ファイルに並べたクエリをまとめて実行する
    Batch {
        /// クエリファイル（拡張子 .yaml/.yml は YAML, それ以外は JSON）
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// 各問題の例題を実行し期待値と並べて表示する
    Demo,
}
