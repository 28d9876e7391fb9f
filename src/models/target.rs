// src/models/target.rs

/// 目標（自由落下する敵ミサイル）が地表に達するまでの時間
///
/// h = 1/2 · g · t² を t について解く。
///
/// # 引数
/// - `height`: 初期高度 h₀ (km)
/// - `gravity`: 重力加速度 (km/s²)
///
/// # 戻り値
/// - 落下時間 (秒)
pub fn target_flight_time(height: f64, gravity: f64) -> f64 {
    (2.0 * height / gravity).sqrt()
}

/// 時刻 `time` における目標の高度
///
/// 地表で 0 に固定し、負の値は返さない。
pub fn target_position(height: f64, time: f64, gravity: f64) -> f64 {
    (height - 0.5 * gravity * time.powi(2)).max(0.0)
}

/// 目標が地表に達しているか
pub fn is_grounded(altitude: f64) -> bool {
    altitude <= 0.0
}
