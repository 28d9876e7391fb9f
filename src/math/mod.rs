// src/math/mod.rs

pub mod geometry;

pub use geometry::euclidean_distance;
pub use geometry::Point;
