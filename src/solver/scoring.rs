// src/solver/scoring.rs

use thiserror::Error;

use crate::config::ScenarioConfig;
use crate::math::geometry::{euclidean_distance, is_non_negative, Point};
use crate::models::{interceptor_position, target_flight_time, target_position};

/// 軌道の途中で地表下に潜っていないかを調べるサンプル点数
pub const PATH_SAMPLES: usize = 10;

/// 最適化の探索変数 (θ, v, t_i)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub angle: f64,          // 発射角（度）
    pub speed: f64,          // 発射速度 (km/s)
    pub intercept_time: f64, // 迎撃時刻 (秒)
}

impl Candidate {
    pub fn from_slice(param: &[f64]) -> Option<Self> {
        match param {
            &[angle, speed, intercept_time] => Some(Self {
                angle,
                speed,
                intercept_time,
            }),
            _ => None,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.angle, self.speed, self.intercept_time]
    }
}

/// 実行可能な候補の迎撃点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptPoint {
    pub interceptor: Point,
    pub target: Point,
    pub miss_distance: f64,
    pub cost: f64,
}

/// 候補が棄却された理由
///
/// `NegativeEndpoint` と `PathBelowGround` は防御的な検査で、`interceptor_position` の
/// 出力（y は 0 で固定、θ ∈ [0°, 90°] で x ≥ 0）からは発生しない。
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Infeasibility {
    #[error("迎撃時刻 {time} s が発射時刻 {delay} s 以前です。")]
    InterceptBeforeLaunch { time: f64, delay: f64 },
    #[error("迎撃時刻 {time} s には目標が着弾済みです（落下時間 {flight_time} s）。")]
    TargetAlreadyLanded { time: f64, flight_time: f64 },
    #[error("速度 {speed} km/s が探索範囲外です。")]
    SpeedOutOfBounds { speed: f64 },
    #[error("発射角 {angle}° が探索範囲外です。")]
    AngleOutOfBounds { angle: f64 },
    #[error("目標が地表に達しています。")]
    TargetGrounded,
    #[error("迎撃高度 {altitude} km が最低高度を下回っています。")]
    BelowMinimumAltitude { altitude: f64 },
    #[error("迎撃点 ({x}, {y}) が負の座標です。")]
    NegativeEndpoint { x: f64, y: f64 },
    #[error("時刻 {time} s で軌道が負の座標を通過します。")]
    PathBelowGround { time: f64 },
}

/// 候補の制約を検証し、迎撃点とコストを求める
///
/// # 引数
/// - `candidate`: 探索変数 (θ, v, t_i)
/// - `config`: シナリオ設定
///
/// # 戻り値
/// - 実行可能なら迎撃点（コスト = 迎撃ミサイルと目標の距離 + 軸近傍ペナルティ）
/// - 制約違反ならその理由
pub fn evaluate(candidate: &Candidate, config: &ScenarioConfig) -> Result<InterceptPoint, Infeasibility> {
    let Candidate {
        angle,
        speed,
        intercept_time,
    } = *candidate;
    let delay = config.launch_delay();
    let gravity = config.gravity();
    let flight_time = target_flight_time(config.target_height(), gravity);

    // 1. 探索範囲
    if intercept_time <= delay {
        return Err(Infeasibility::InterceptBeforeLaunch {
            time: intercept_time,
            delay,
        });
    }
    if intercept_time > flight_time {
        return Err(Infeasibility::TargetAlreadyLanded {
            time: intercept_time,
            flight_time,
        });
    }
    if speed < config.speed_min() || speed > config.speed_max() {
        return Err(Infeasibility::SpeedOutOfBounds { speed });
    }
    let (angle_min, angle_max) = config.angle_bounds();
    if !(angle_min..=angle_max).contains(&angle) {
        return Err(Infeasibility::AngleOutOfBounds { angle });
    }

    // 2. 迎撃時刻の目標高度
    let target_y = target_position(config.target_height(), intercept_time, gravity);
    if target_y <= 0.0 {
        return Err(Infeasibility::TargetGrounded);
    }
    if !meets_intercept_altitude(target_y, config.min_intercept_altitude()) {
        return Err(Infeasibility::BelowMinimumAltitude { altitude: target_y });
    }

    // 3. 迎撃点
    let interceptor = interceptor_position(angle, speed, intercept_time, delay, gravity);
    if !is_non_negative(&interceptor) {
        return Err(Infeasibility::NegativeEndpoint {
            x: interceptor[0],
            y: interceptor[1],
        });
    }

    // 4. 途中経路
    if let Some(time) = first_negative_sample(angle, speed, intercept_time, delay, gravity) {
        return Err(Infeasibility::PathBelowGround { time });
    }

    // 5. コスト
    let target = [config.distance(), target_y];
    let miss_distance = euclidean_distance(&interceptor, &target);
    let mut cost = miss_distance;
    if interceptor[0] < config.edge_margin() || interceptor[1] < config.edge_margin() {
        cost += config.edge_penalty();
    }

    Ok(InterceptPoint {
        interceptor,
        target,
        miss_distance,
        cost,
    })
}

/// 最適化の目的関数。実行不可能な候補は +∞
pub fn score(candidate: &Candidate, config: &ScenarioConfig) -> f64 {
    evaluate(candidate, config).map_or(f64::INFINITY, |point| point.cost)
}

/// 迎撃を成功と認める高度か（下限ちょうどは認める）
pub fn meets_intercept_altitude(altitude: f64, floor: f64) -> bool {
    altitude >= floor
}

fn first_negative_sample(
    angle: f64,
    speed: f64,
    intercept_time: f64,
    delay: f64,
    gravity: f64,
) -> Option<f64> {
    let span = intercept_time - delay;
    (0..PATH_SAMPLES)
        .map(|i| delay + span * i as f64 / (PATH_SAMPLES - 1) as f64)
        .find(|&t| !is_non_negative(&interceptor_position(angle, speed, t, delay, gravity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn candidate(angle: f64, speed: f64, intercept_time: f64) -> Candidate {
        Candidate {
            angle,
            speed,
            intercept_time,
        }
    }

    #[test]
    fn test_from_slice_requires_three_values() {
        assert_eq!(
            Candidate::from_slice(&[45.0, 1.0, 3.0]),
            Some(candidate(45.0, 1.0, 3.0))
        );
        assert_eq!(Candidate::from_slice(&[45.0, 1.0]), None);
    }

    #[test]
    fn test_rejects_time_window_violations() {
        let mut config = ScenarioConfig::default();
        config.set_launch_delay(2.0).unwrap();

        assert_eq!(
            evaluate(&candidate(45.0, 1.5, 2.0), &config),
            Err(Infeasibility::InterceptBeforeLaunch { time: 2.0, delay: 2.0 })
        );
        assert!(matches!(
            evaluate(&candidate(45.0, 1.5, 25.0), &config),
            Err(Infeasibility::TargetAlreadyLanded { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_box_speed_and_angle() {
        let config = ScenarioConfig::default();
        assert_eq!(
            evaluate(&candidate(45.0, 0.3, 5.0), &config),
            Err(Infeasibility::SpeedOutOfBounds { speed: 0.3 })
        );
        assert_eq!(
            evaluate(&candidate(95.0, 1.5, 5.0), &config),
            Err(Infeasibility::AngleOutOfBounds { angle: 95.0 })
        );
        assert_eq!(score(&candidate(-1.0, 1.5, 5.0), &config), f64::INFINITY);
    }

    #[test]
    fn test_altitude_floor_boundary() {
        let height = 2.0;
        let time = 15.0;
        let mut config = ScenarioConfig::default();
        let altitude = target_position(height, time, config.gravity());

        // 下限ちょうど: 受理
        config.set_min_intercept_altitude(altitude).unwrap();
        assert!(evaluate(&candidate(30.0, 1.0, time), &config).is_ok());

        // 下限をわずかに上回る設定: 棄却
        config.set_min_intercept_altitude(altitude + 1e-12).unwrap();
        assert!(matches!(
            evaluate(&candidate(30.0, 1.0, time), &config),
            Err(Infeasibility::BelowMinimumAltitude { .. })
        ));

        assert!(meets_intercept_altitude(0.1, 0.1));
        assert!(!meets_intercept_altitude(0.1 - f64::EPSILON, 0.1));
    }

    #[test]
    fn test_rejects_target_near_ground() {
        let config = ScenarioConfig::default();
        // t = 20.0 s で目標高度 ≈ 0.04 km < 0.1 km
        assert!(matches!(
            evaluate(&candidate(30.0, 1.0, 20.0), &config),
            Err(Infeasibility::BelowMinimumAltitude { .. })
        ));
    }

    #[test]
    fn test_cost_is_miss_distance() {
        let config = ScenarioConfig::default();
        let point = evaluate(&candidate(45.0, 1.0, 5.0), &config).unwrap();

        let expected_target = [5.0, target_position(2.0, 5.0, config.gravity())];
        let expected_interceptor = interceptor_position(45.0, 1.0, 5.0, 0.0, config.gravity());
        assert_eq!(point.target, expected_target);
        assert_eq!(point.interceptor, expected_interceptor);
        assert_abs_diff_eq!(
            point.cost,
            euclidean_distance(&expected_interceptor, &expected_target),
            epsilon = 1e-12
        );
        assert_eq!(point.cost, point.miss_distance);
    }

    #[test]
    fn test_axis_shots_pass_ground_checks() {
        // 垂直・水平発射でも座標は負にならず、経路検査で棄却されない
        let config = ScenarioConfig::default();
        for angle in [0.0, 90.0] {
            let point = evaluate(&candidate(angle, 1.0, 5.0), &config).unwrap();
            assert!(is_non_negative(&point.interceptor));
            assert_eq!(first_negative_sample(angle, 1.0, 5.0, 0.0, config.gravity()), None);
        }
    }

    #[test]
    fn test_penalty_near_axis() {
        let config = ScenarioConfig::default();
        // 発射角 0°: 迎撃点の高度が 0 に張り付く
        let point = evaluate(&candidate(0.0, 1.0, 5.0), &config).unwrap();
        assert_eq!(point.interceptor[1], 0.0);
        assert_abs_diff_eq!(point.cost, point.miss_distance + 100.0, epsilon = 1e-12);
    }
}
