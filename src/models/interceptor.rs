// src/models/interceptor.rs

use crate::math::Point;

/// 時刻 `time` における迎撃ミサイルの位置（放物運動）
///
/// # 引数
/// - `angle`: 発射角（度）
/// - `speed`: 発射速度 (km/s)
/// - `time`: シミュレーション時刻 (秒)
/// - `delay`: 発射遅延 τ (秒)
/// - `gravity`: 重力加速度 (km/s²)
///
/// # 戻り値
/// - 位置 [x, y] (km)。発射前は原点、y は地表で 0 に固定
pub fn interceptor_position(angle: f64, speed: f64, time: f64, delay: f64, gravity: f64) -> Point {
    if time < delay {
        return [0.0, 0.0];
    }

    let elapsed = time - delay;
    let angle_rad = angle.to_radians();

    let vx = speed * angle_rad.cos();
    let vy = speed * angle_rad.sin();

    let x = vx * elapsed;
    let y = vy * elapsed - 0.5 * gravity * elapsed.powi(2);

    [x, y.max(0.0)]
}

/// 発射済みかつ地表に戻っているか
pub fn has_landed(position: &Point, time: f64, delay: f64) -> bool {
    time > delay && position[1] <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scenario::GRAVITY;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_origin_before_launch() {
        for time in [0.0, 0.5, 2.99] {
            assert_eq!(interceptor_position(45.0, 1.5, time, 3.0, GRAVITY), [0.0, 0.0]);
        }
    }

    #[test]
    fn test_at_launch_instant() {
        assert_eq!(interceptor_position(45.0, 1.5, 3.0, 3.0, GRAVITY), [0.0, 0.0]);
    }

    #[test]
    fn test_projectile_motion_after_delay() {
        // 1 s 経過後: x = v cosθ, y = v sinθ - g/2
        let [x, y] = interceptor_position(30.0, 2.0, 1.5, 0.5, GRAVITY);
        assert_abs_diff_eq!(x, 2.0 * 30f64.to_radians().cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0 - 0.0049, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_shot_stays_on_axis() {
        let [x, y] = interceptor_position(90.0, 1.0, 10.0, 0.0, GRAVITY);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert!(y > 0.0);
    }

    #[test]
    fn test_altitude_clamped_after_landing() {
        // 水平発射: 直ちに地表以下になるので y = 0
        let [x, y] = interceptor_position(0.0, 1.0, 5.0, 0.0, GRAVITY);
        assert_abs_diff_eq!(x, 5.0, epsilon = 1e-12);
        assert_eq!(y, 0.0);
        assert!(has_landed(&[x, y], 5.0, 0.0));
        assert!(!has_landed(&[0.0, 0.0], 0.0, 0.0));
    }
}
