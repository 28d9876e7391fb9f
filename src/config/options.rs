// src/config/options.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::parameters::LaunchParameters;
use crate::config::scenario::ScenarioConfig;

/// 外部から個別に設定できる項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOption {
    Height,
    Distance,
    SpeedMin,
    SpeedMax,
    Speed,
    Angle,
    Delay,
    TimeStep,
    Tolerance,
    MinAltitude,
}

impl ConfigOption {
    pub const ALL: [ConfigOption; 10] = [
        ConfigOption::Height,
        ConfigOption::Distance,
        ConfigOption::SpeedMin,
        ConfigOption::SpeedMax,
        ConfigOption::Speed,
        ConfigOption::Angle,
        ConfigOption::Delay,
        ConfigOption::TimeStep,
        ConfigOption::Tolerance,
        ConfigOption::MinAltitude,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ConfigOption::Height => "height",
            ConfigOption::Distance => "distance",
            ConfigOption::SpeedMin => "speed-min",
            ConfigOption::SpeedMax => "speed-max",
            ConfigOption::Speed => "speed",
            ConfigOption::Angle => "angle",
            ConfigOption::Delay => "delay",
            ConfigOption::TimeStep => "time-step",
            ConfigOption::Tolerance => "tolerance",
            ConfigOption::MinAltitude => "min-altitude",
        }
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConfigOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.key() == key)
            .ok_or_else(|| ConfigError::UnknownOption(key.to_string()))
    }
}

/// シナリオ設定と手動発射パラメータの組
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub scenario: ScenarioConfig,
    pub launch: LaunchParameters,
}

impl Settings {
    /// 文字列で与えられた値を解釈して該当項目に設定する
    ///
    /// # 引数
    /// - `option`: 設定項目
    /// - `raw`: 入力文字列
    ///
    /// # 戻り値
    /// - 数値でない、または範囲外の場合はエラー（既存の値は保持される）
    pub fn apply(&mut self, option: ConfigOption, raw: &str) -> Result<(), ConfigError> {
        let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
            option: option.key(),
            raw: raw.to_string(),
        })?;

        match option {
            ConfigOption::Height => self.scenario.set_target_height(value),
            ConfigOption::Distance => self.scenario.set_distance(value),
            ConfigOption::SpeedMin => self.scenario.set_speed_min(value),
            ConfigOption::SpeedMax => self.scenario.set_speed_max(value),
            ConfigOption::Speed => self.launch.set_speed(value),
            ConfigOption::Angle => self.launch.set_angle(value),
            ConfigOption::Delay => self.scenario.set_launch_delay(value),
            ConfigOption::TimeStep => self.scenario.set_time_step(value),
            ConfigOption::Tolerance => self.scenario.set_tolerance(value),
            ConfigOption::MinAltitude => self.scenario.set_min_intercept_altitude(value),
        }
    }

    /// `key=value` 形式の指定を適用する
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::UnknownOption(assignment.to_string()))?;
        let option: ConfigOption = key.parse()?;
        self.apply(option, raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scenario.validate()?;
        self.launch.validate()
    }
}
