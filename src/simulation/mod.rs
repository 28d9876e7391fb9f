// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;

use std::fmt;

use serde::Serialize;

use crate::config::{LaunchParameters, ScenarioConfig};

pub use framework::{reset, run_to_end, start, step, stop};

/// ある時刻における1物体の位置
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time: f64, // 秒
    pub x: f64,    // km
    pub y: f64,    // km
}

/// 1ステップで追加された最新のサンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSamples {
    pub target: TrajectorySample,
    pub interceptor: TrajectorySample,
}

/// 実行の終了結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// 判定半径内かつ最低高度以上で迎撃
    Intercepted { time: f64, altitude: f64 },
    /// 目標が地表に着弾
    TargetImpacted,
    /// 判定半径内だが目標高度が最低高度未満
    AltitudeFailure { altitude: f64 },
    /// 外部から停止された
    Stopped,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Intercepted { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Intercepted { time, altitude } => {
                write!(f, "迎撃成功（高度 {:.2} km, {:.2} 秒）", altitude, time)
            }
            Outcome::TargetImpacted => write!(f, "目標が着弾しました。迎撃失敗"),
            Outcome::AltitudeFailure { altitude } => {
                write!(f, "迎撃失敗: 高度が低すぎます（{:.2} km）", altitude)
            }
            Outcome::Stopped => write!(f, "停止"),
        }
    }
}

/// 1回のシミュレーション実行の状態
///
/// `reset` で生成され、`step` によってのみ更新される。
/// `running` が false になった後は次の `reset` まで変化しない。
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    config: ScenarioConfig,
    launch: LaunchParameters,
    time: f64,
    target_history: Vec<TrajectorySample>,
    interceptor_history: Vec<TrajectorySample>,
    intercepted: bool,
    target_impacted: bool,
    interceptor_grounded: bool,
    running: bool,
    outcome: Option<Outcome>,
}

impl RunState {
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn launch(&self) -> &LaunchParameters {
        &self.launch
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn target_history(&self) -> &[TrajectorySample] {
        &self.target_history
    }

    pub fn interceptor_history(&self) -> &[TrajectorySample] {
        &self.interceptor_history
    }

    pub fn intercepted(&self) -> bool {
        self.intercepted
    }

    pub fn target_impacted(&self) -> bool {
        self.target_impacted
    }

    pub fn interceptor_grounded(&self) -> bool {
        self.interceptor_grounded
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 終了していれば結果、実行前・実行中は None
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}
