// src/models/mod.rs

pub mod interceptor;
pub mod target;

pub use interceptor::interceptor_position;
pub use target::{target_flight_time, target_position};
