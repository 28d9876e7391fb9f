// src/solver/mod.rs

//! 迎撃パラメータ (θ, v, t_i) の探索
//!
//! Nelder-Mead 法による局所最適化。初期値は各探索範囲の中点に固定しているため、
//! 得られる解は大域最適とは限らない。

pub mod problem;
pub mod scoring;

use argmin::core::{Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;
use tracing::{debug, info, warn};

use crate::config::{LaunchParameters, ScenarioConfig};
use crate::models::{target_flight_time, target_position};
use problem::InterceptProblem;
use scoring::Candidate;

/// 最適化の打ち切り条件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    pub sd_tolerance: f64, // 単体頂点のコストの標準偏差がこれを下回れば収束
    pub max_iters: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            sd_tolerance: 1e-6,
            max_iters: 10_000,
        }
    }
}

/// 最適化の終了状態
#[derive(Debug, Clone, PartialEq)]
pub enum SolverStatus {
    Converged,
    MaxItersReached,
    /// 発射遅延が目標の落下時間以上で、迎撃可能な時間帯が存在しない
    NoInterceptWindow { delay: f64, flight_time: f64 },
    Aborted(String),
}

/// 最適化の結果
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub success: bool,
    pub launch: LaunchParameters,
    pub intercept_time: f64,
    pub cost: f64,
    pub status: SolverStatus,
    pub iterations: u64,
    pub intercept_altitude: f64, // 予測迎撃高度 (km)
    pub target_flight_time: f64, // 目標の落下時間 (秒)
}

impl SolverResult {
    fn unsolved(guess: &Candidate, status: SolverStatus, flight_time: f64) -> Self {
        Self {
            success: false,
            launch: LaunchParameters {
                angle: guess.angle,
                speed: guess.speed,
            },
            intercept_time: guess.intercept_time,
            cost: f64::INFINITY,
            status,
            iterations: 0,
            intercept_altitude: 0.0,
            target_flight_time: flight_time,
        }
    }
}

/// 既定の打ち切り条件で最適な迎撃パラメータを探索する
pub fn solve(config: &ScenarioConfig) -> SolverResult {
    solve_with(config, &SolverSettings::default())
}

/// 最適な迎撃パラメータを探索する
///
/// 解が見つからない場合もエラーではなく `success = false` の結果として返す。
pub fn solve_with(config: &ScenarioConfig, settings: &SolverSettings) -> SolverResult {
    let height = config.target_height();
    let delay = config.launch_delay();
    let flight_time = target_flight_time(height, config.gravity());
    let guess = initial_guess(config, flight_time);

    if delay >= flight_time {
        warn!(
            "迎撃可能な時間帯がありません（発射遅延 {:.2} s ≥ 落下時間 {:.2} s）",
            delay, flight_time
        );
        return SolverResult::unsolved(
            &guess,
            SolverStatus::NoInterceptWindow { delay, flight_time },
            flight_time,
        );
    }

    debug!("最適化開始: 初期値 {:?}", guess);

    let solver = match NelderMead::new(initial_simplex(config, &guess, flight_time))
        .with_sd_tolerance(settings.sd_tolerance)
    {
        Ok(solver) => solver,
        Err(e) => {
            return SolverResult::unsolved(&guess, SolverStatus::Aborted(e.to_string()), flight_time)
        }
    };

    let outcome = Executor::new(InterceptProblem::new(config), solver)
        .configure(|state| state.max_iters(settings.max_iters))
        .run();

    let result = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("最適化が異常終了しました: {}", e);
            return SolverResult::unsolved(&guess, SolverStatus::Aborted(e.to_string()), flight_time);
        }
    };

    let state = result.state();
    let status = match state.get_termination_status() {
        TerminationStatus::Terminated(TerminationReason::SolverConverged) => SolverStatus::Converged,
        TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
            SolverStatus::MaxItersReached
        }
        other => SolverStatus::Aborted(format!("{:?}", other)),
    };
    let best = state
        .get_best_param()
        .and_then(|param| Candidate::from_slice(param))
        .unwrap_or(guess);
    let cost = state.get_best_cost();
    let success = status == SolverStatus::Converged && cost < config.tolerance();

    let solution = SolverResult {
        success,
        launch: LaunchParameters {
            angle: best.angle,
            speed: best.speed,
        },
        intercept_time: best.intercept_time,
        cost,
        status,
        iterations: state.get_iter(),
        intercept_altitude: target_position(height, best.intercept_time, config.gravity()),
        target_flight_time: flight_time,
    };

    if solution.success {
        info!(
            "最適解: 発射角 {:.1}°, 速度 {:.2} km/s, 迎撃時刻 {:.2} s, 迎撃高度 {:.2} km",
            solution.launch.angle,
            solution.launch.speed,
            solution.intercept_time,
            solution.intercept_altitude
        );
    } else {
        warn!(
            "現在の条件では有効な迎撃解が見つかりません（距離 {:.3} km, {:?}）",
            solution.cost, solution.status
        );
    }

    solution
}

/// 初期値: 各探索範囲の中点
fn initial_guess(config: &ScenarioConfig, flight_time: f64) -> Candidate {
    let (angle_min, angle_max) = config.angle_bounds();
    Candidate {
        angle: (angle_min + angle_max) / 2.0,
        speed: (config.speed_min() + config.speed_max()) / 2.0,
        intercept_time: (config.launch_delay() + flight_time) / 2.0,
    }
}

/// 初期値と、各軸方向に探索範囲の 1/4 だけずらした頂点からなる単体
fn initial_simplex(config: &ScenarioConfig, guess: &Candidate, flight_time: f64) -> Vec<Vec<f64>> {
    let (angle_min, angle_max) = config.angle_bounds();
    let ranges = [
        angle_max - angle_min,
        config.speed_max() - config.speed_min(),
        flight_time - config.launch_delay(),
    ];

    let origin = guess.to_vec();
    let mut simplex = vec![origin.clone()];
    for (axis, range) in ranges.iter().enumerate() {
        let mut vertex = origin.clone();
        vertex[axis] += range / 4.0;
        simplex.push(vertex);
    }
    simplex
}
