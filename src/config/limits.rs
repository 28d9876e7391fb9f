// src/config/limits.rs

use crate::config::error::ConfigError;

// 入力値の上下限
pub const MIN_HEIGHT: f64 = 0.5; // km
pub const MAX_HEIGHT: f64 = 20.0; // km
pub const MIN_DISTANCE: f64 = 0.5; // km
pub const MAX_DISTANCE: f64 = 150.0; // km
pub const MIN_SPEED: f64 = 0.6; // km/s
pub const MAX_SPEED: f64 = 2.5; // km/s
pub const MIN_ANGLE: f64 = 0.0; // 度
pub const MAX_ANGLE: f64 = 90.0; // 度
pub const MIN_DELAY: f64 = 0.0; // 秒
pub const MAX_DELAY: f64 = 10.0; // 秒
pub const MAX_TIME_STEP: f64 = 1.0; // 秒

/// 値が閉区間 `[min, max]` に収まっているかを検証する
pub fn check_range(option: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { option });
    }
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            option,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// 値が正（0 を含まない）かつ `max` 以下であるかを検証する
pub fn check_positive(option: &'static str, value: f64, max: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { option });
    }
    if value <= 0.0 || value > max {
        return Err(ConfigError::OutOfRange {
            option,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(value)
}
