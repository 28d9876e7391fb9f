// src/lib.rs

//! 自由落下する目標に対する迎撃の計画とシミュレーション
//!
//! - `models`: 目標・迎撃ミサイルの閉形式の運動モデル
//! - `solver`: 迎撃パラメータ (発射角, 速度, 迎撃時刻) の最適化
//! - `simulation`: 時間刻みによる実行と終了判定
//! - `config`: シナリオ設定と入力値の検証

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;
pub mod solver;

pub use config::{ConfigError, ConfigOption, LaunchParameters, ScenarioConfig, Settings};
pub use simulation::{Outcome, RunState, StepSamples, TrajectorySample};
pub use solver::{solve, SolverResult, SolverStatus};
