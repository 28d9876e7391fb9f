// src/simulation/error.rs

use thiserror::Error;

use crate::config::ConfigError;

/// 設定ファイル読み込みのエラー
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("設定ファイル {path} を開けません: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("設定ファイル {path} の解析に失敗しました: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("設定値が不正です: {0}")]
    Invalid(#[from] ConfigError),
}

/// 軌跡の書き出しエラー
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSVの書き出しに失敗しました: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
}
