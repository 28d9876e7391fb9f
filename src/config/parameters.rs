// src/config/parameters.rs

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::limits::{check_positive, check_range, MAX_ANGLE, MAX_SPEED, MIN_ANGLE};

pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0; // 度
pub const DEFAULT_LAUNCH_SPEED: f64 = 0.3; // km/s

/// 迎撃ミサイルの発射パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchParameters {
    pub angle: f64, // 発射角（度）
    pub speed: f64, // 発射速度 (km/s)
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            angle: DEFAULT_LAUNCH_ANGLE,
            speed: DEFAULT_LAUNCH_SPEED,
        }
    }
}

impl LaunchParameters {
    /// 検証済みの発射パラメータを生成する
    pub fn new(angle: f64, speed: f64) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        params.set_angle(angle)?;
        params.set_speed(speed)?;
        Ok(params)
    }

    pub fn set_angle(&mut self, value: f64) -> Result<(), ConfigError> {
        self.angle = check_range("angle", value, MIN_ANGLE, MAX_ANGLE)?;
        Ok(())
    }

    /// 手動発射の速度は 0 より大きく上限以下であればよい
    pub fn set_speed(&mut self, value: f64) -> Result<(), ConfigError> {
        self.speed = check_positive("speed", value, MAX_SPEED)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("angle", self.angle, MIN_ANGLE, MAX_ANGLE)?;
        check_positive("speed", self.speed, MAX_SPEED)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_launch_is_slow_manual_shot() {
        let params = LaunchParameters::default();
        assert_eq!(params.angle, 45.0);
        assert_eq!(params.speed, 0.3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_angle_is_rejected_without_mutation() {
        let mut params = LaunchParameters::default();
        assert!(params.set_angle(91.0).is_err());
        assert!(params.set_angle(-1.0).is_err());
        assert_eq!(params.angle, 45.0);
    }

    #[test]
    fn test_new_rejects_zero_speed() {
        assert!(LaunchParameters::new(30.0, 0.0).is_err());
        assert!(LaunchParameters::new(30.0, 2.6).is_err());
        assert_eq!(
            LaunchParameters::new(30.0, 1.2).unwrap(),
            LaunchParameters { angle: 30.0, speed: 1.2 }
        );
    }
}
