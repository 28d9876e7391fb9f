// src/config/scenario.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::error::ConfigError;
use crate::config::limits::*;

pub const DEFAULT_TARGET_HEIGHT: f64 = 2.0; // km
pub const DEFAULT_DISTANCE: f64 = 5.0; // km
pub const DEFAULT_LAUNCH_DELAY: f64 = 0.0; // 秒
pub const GRAVITY: f64 = 9.8 / 1000.0; // km/s²
pub const DEFAULT_TIME_STEP: f64 = 0.1; // 秒
pub const DEFAULT_TOLERANCE: f64 = 0.1; // km
pub const DEFAULT_MIN_INTERCEPT_ALTITUDE: f64 = 0.1; // km
pub const DEFAULT_EDGE_MARGIN: f64 = 0.1; // km
pub const DEFAULT_EDGE_PENALTY: f64 = 100.0;

/// 迎撃シナリオの設定（1回の実行中は不変）
///
/// 各フィールドはセッター経由でのみ変更でき、検証に失敗した値は反映されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    target_height: f64,          // 目標の初期高度 h₀ (km)
    distance: f64,               // 防衛側から目標までの水平距離 D (km)
    speed_min: f64,              // 迎撃ミサイル速度の下限 (km/s)
    speed_max: f64,              // 迎撃ミサイル速度の上限 (km/s)
    launch_delay: f64,           // 発射遅延 τ (秒)
    gravity: f64,                // 重力加速度 g (km/s²)
    tolerance: f64,              // 迎撃判定半径 ε (km)
    time_step: f64,              // 時間刻み Δt (秒)
    min_intercept_altitude: f64, // 迎撃として認める最低高度 (km)
    edge_margin: f64,            // 軸近傍とみなす幅 (km)
    edge_penalty: f64,           // 軸近傍の解に加えるペナルティ
    angle_min: f64,              // 最適化時の発射角下限（度）
    angle_max: f64,              // 最適化時の発射角上限（度）
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            target_height: DEFAULT_TARGET_HEIGHT,
            distance: DEFAULT_DISTANCE,
            speed_min: MIN_SPEED,
            speed_max: MAX_SPEED,
            launch_delay: DEFAULT_LAUNCH_DELAY,
            gravity: GRAVITY,
            tolerance: DEFAULT_TOLERANCE,
            time_step: DEFAULT_TIME_STEP,
            min_intercept_altitude: DEFAULT_MIN_INTERCEPT_ALTITUDE,
            edge_margin: DEFAULT_EDGE_MARGIN,
            edge_penalty: DEFAULT_EDGE_PENALTY,
            angle_min: MIN_ANGLE,
            angle_max: MAX_ANGLE,
        }
    }
}

impl ScenarioConfig {
    pub fn target_height(&self) -> f64 {
        self.target_height
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed_min(&self) -> f64 {
        self.speed_min
    }

    pub fn speed_max(&self) -> f64 {
        self.speed_max
    }

    pub fn launch_delay(&self) -> f64 {
        self.launch_delay
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn min_intercept_altitude(&self) -> f64 {
        self.min_intercept_altitude
    }

    pub fn edge_margin(&self) -> f64 {
        self.edge_margin
    }

    pub fn edge_penalty(&self) -> f64 {
        self.edge_penalty
    }

    pub fn angle_bounds(&self) -> (f64, f64) {
        (self.angle_min, self.angle_max)
    }

    pub fn set_target_height(&mut self, value: f64) -> Result<(), ConfigError> {
        self.target_height = logged(check_range("height", value, MIN_HEIGHT, MAX_HEIGHT))?;
        Ok(())
    }

    pub fn set_distance(&mut self, value: f64) -> Result<(), ConfigError> {
        self.distance = logged(check_range("distance", value, MIN_DISTANCE, MAX_DISTANCE))?;
        Ok(())
    }

    pub fn set_speed_min(&mut self, value: f64) -> Result<(), ConfigError> {
        let value = logged(check_range("speed-min", value, MIN_SPEED, MAX_SPEED))?;
        logged(check_speed_order(value, self.speed_max))?;
        self.speed_min = value;
        Ok(())
    }

    pub fn set_speed_max(&mut self, value: f64) -> Result<(), ConfigError> {
        let value = logged(check_range("speed-max", value, MIN_SPEED, MAX_SPEED))?;
        logged(check_speed_order(self.speed_min, value))?;
        self.speed_max = value;
        Ok(())
    }

    pub fn set_launch_delay(&mut self, value: f64) -> Result<(), ConfigError> {
        self.launch_delay = logged(check_range("delay", value, MIN_DELAY, MAX_DELAY))?;
        Ok(())
    }

    pub fn set_time_step(&mut self, value: f64) -> Result<(), ConfigError> {
        self.time_step = logged(check_positive("time-step", value, MAX_TIME_STEP))?;
        Ok(())
    }

    pub fn set_tolerance(&mut self, value: f64) -> Result<(), ConfigError> {
        self.tolerance = logged(check_positive("tolerance", value, f64::INFINITY))?;
        Ok(())
    }

    pub fn set_min_intercept_altitude(&mut self, value: f64) -> Result<(), ConfigError> {
        self.min_intercept_altitude =
            logged(check_range("min-altitude", value, 0.0, f64::INFINITY))?;
        Ok(())
    }

    /// 設定全体を検証する（YAML 読み込み後などに使用）
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("height", self.target_height, MIN_HEIGHT, MAX_HEIGHT)?;
        check_range("distance", self.distance, MIN_DISTANCE, MAX_DISTANCE)?;
        check_range("speed-min", self.speed_min, MIN_SPEED, MAX_SPEED)?;
        check_range("speed-max", self.speed_max, MIN_SPEED, MAX_SPEED)?;
        check_speed_order(self.speed_min, self.speed_max)?;
        check_range("delay", self.launch_delay, MIN_DELAY, MAX_DELAY)?;
        check_positive("gravity", self.gravity, f64::INFINITY)?;
        check_positive("time-step", self.time_step, MAX_TIME_STEP)?;
        check_positive("tolerance", self.tolerance, f64::INFINITY)?;
        check_range("min-altitude", self.min_intercept_altitude, 0.0, f64::INFINITY)?;
        check_range("edge-margin", self.edge_margin, 0.0, f64::INFINITY)?;
        check_range("edge-penalty", self.edge_penalty, 0.0, f64::INFINITY)?;
        check_range("angle-min", self.angle_min, MIN_ANGLE, MAX_ANGLE)?;
        check_range("angle-max", self.angle_max, self.angle_min, MAX_ANGLE)?;
        Ok(())
    }
}

fn check_speed_order(min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedSpeedBounds { min, max });
    }
    Ok(())
}

fn logged<T>(result: Result<T, ConfigError>) -> Result<T, ConfigError> {
    if let Err(e) = &result {
        warn!("設定値を拒否しました: {}", e);
    }
    result
}
