// src/config/error.rs

use thiserror::Error;

/// 設定値の検証エラー
///
/// 検証に失敗した場合、元の設定値は変更されない。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{option} の値 {value} は範囲外です（{min} 〜 {max}）。")]
    OutOfRange {
        option: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{option} の値 \"{raw}\" は数値ではありません。")]
    NotANumber { option: &'static str, raw: String },
    #[error("{option} の値が有限の数値ではありません。")]
    NonFinite { option: &'static str },
    #[error("未知の設定項目です: {0}")]
    UnknownOption(String),
    #[error("速度の下限 {min} が上限 {max} を超えています。")]
    InvertedSpeedBounds { min: f64, max: f64 },
}
