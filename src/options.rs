// src/options.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 1 行 1 結果のプレーンテキスト
    #[default]
    Text,
    Json,
    /// `yaml` フィーチャ無効時は出力時にエラー
    Yaml,
}
