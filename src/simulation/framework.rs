// src/simulation/framework.rs

use tracing::{debug, info, warn};

use crate::config::{LaunchParameters, ScenarioConfig};
use crate::math::euclidean_distance;
use crate::models::interceptor::{has_landed, interceptor_position};
use crate::models::target::{is_grounded, target_position};
use crate::simulation::{Outcome, RunState, StepSamples, TrajectorySample};
use crate::solver::scoring::meets_intercept_altitude;

/// 新しい実行状態を生成する（前回の軌跡は引き継がない）
pub fn reset(config: &ScenarioConfig, launch: &LaunchParameters) -> RunState {
    debug!(
        "シミュレーションを初期化: 高度 {:.1} km, 距離 {:.1} km, 発射角 {:.1}°, 速度 {:.2} km/s",
        config.target_height(),
        config.distance(),
        launch.angle,
        launch.speed
    );
    RunState {
        config: config.clone(),
        launch: *launch,
        time: 0.0,
        target_history: Vec::new(),
        interceptor_history: Vec::new(),
        intercepted: false,
        target_impacted: false,
        interceptor_grounded: false,
        running: false,
        outcome: None,
    }
}

/// 実行を開始する。実行中、または終了済みの場合は何もしない
pub fn start(state: &mut RunState) {
    if state.running {
        return;
    }
    if let Some(outcome) = state.outcome {
        warn!("終了済みの実行は再開できません（{}）。reset が必要です", outcome);
        return;
    }
    state.running = true;
    debug!("シミュレーション開始 (t = {:.2} s)", state.time);
}

/// 実行を停止する。停止後は reset まで再開できない
pub fn stop(state: &mut RunState) {
    if !state.running {
        return;
    }
    finish(state, Outcome::Stopped);
}

/// 1時間刻みだけシミュレーションを進める
///
/// # 戻り値
/// - 今回追加された目標・迎撃ミサイルのサンプル。実行中でなければ None
pub fn step(state: &mut RunState) -> Option<StepSamples> {
    if !state.running {
        return None;
    }

    let config = &state.config;
    let gravity = config.gravity();
    let delay = config.launch_delay();

    state.time += config.time_step();
    let time = state.time;

    let target_y = target_position(config.target_height(), time, gravity);
    let interceptor = interceptor_position(state.launch.angle, state.launch.speed, time, delay, gravity);

    let samples = StepSamples {
        target: TrajectorySample {
            time,
            x: config.distance(),
            y: target_y,
        },
        interceptor: TrajectorySample {
            time,
            x: interceptor[0],
            y: interceptor[1],
        },
    };
    state.target_history.push(samples.target);
    state.interceptor_history.push(samples.interceptor);

    if !state.interceptor_grounded && has_landed(&interceptor, time, delay) {
        state.interceptor_grounded = true;
        debug!("迎撃ミサイルが地表に到達 (t = {:.2} s)", time);
    }

    // 目標の着弾で直ちに終了
    if is_grounded(target_y) && !state.target_impacted {
        state.target_impacted = true;
        finish(state, Outcome::TargetImpacted);
        return Some(samples);
    }

    if !state.intercepted && !state.target_impacted {
        let distance = euclidean_distance(&interceptor, &[config.distance(), target_y]);
        if distance < config.tolerance() {
            if meets_intercept_altitude(target_y, config.min_intercept_altitude()) {
                state.intercepted = true;
                finish(
                    state,
                    Outcome::Intercepted {
                        time,
                        altitude: target_y,
                    },
                );
            } else {
                finish(state, Outcome::AltitudeFailure { altitude: target_y });
            }
        }
    }

    Some(samples)
}

/// 開始して終了するまで進める
///
/// `max_steps` ステップで終了しなければ停止する。
pub fn run_to_end(state: &mut RunState, max_steps: usize) -> Option<Outcome> {
    start(state);
    for _ in 0..max_steps {
        if step(state).is_none() {
            break;
        }
    }
    if state.running {
        warn!("{} ステップで終了しなかったため停止します", max_steps);
        stop(state);
    }
    state.outcome
}

fn finish(state: &mut RunState, outcome: Outcome) {
    state.running = false;
    state.outcome = Some(outcome);
    match outcome {
        Outcome::Intercepted { .. } => info!("{}", outcome),
        Outcome::Stopped => debug!("シミュレーション停止 (t = {:.2} s)", state.time),
        _ => info!("{} (t = {:.2} s)", outcome, state.time),
    }
}
