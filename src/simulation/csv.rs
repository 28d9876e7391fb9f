// src/simulation/csv.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::simulation::error::ExportError;
use crate::simulation::RunState;

/// CSVの1行（1ステップ分の両物体の位置）
#[derive(Debug, Serialize)]
struct TrajectoryRow {
    #[serde(rename = "time(s)")]
    time: f64,
    #[serde(rename = "target_x(km)")]
    target_x: f64,
    #[serde(rename = "target_y(km)")]
    target_y: f64,
    #[serde(rename = "interceptor_x(km)")]
    interceptor_x: f64,
    #[serde(rename = "interceptor_y(km)")]
    interceptor_y: f64,
}

/// 軌跡をCSVとして書き出す
pub fn write_trajectories<W: Write>(writer: W, state: &RunState) -> Result<(), ExportError> {
    let mut writer = ::csv::Writer::from_writer(writer);

    for (target, interceptor) in state
        .target_history()
        .iter()
        .zip(state.interceptor_history().iter())
    {
        writer.serialize(TrajectoryRow {
            time: target.time,
            target_x: target.x,
            target_y: target.y,
            interceptor_x: interceptor.x,
            interceptor_y: interceptor.y,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// 軌跡をファイルへ書き出す
pub fn save_trajectories<P: AsRef<Path>>(path: P, state: &RunState) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_trajectories(BufWriter::new(file), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LaunchParameters, ScenarioConfig};
    use crate::simulation::framework::{reset, start, step};

    fn stepped_state(steps: usize) -> RunState {
        let mut state = reset(&ScenarioConfig::default(), &LaunchParameters::default());
        start(&mut state);
        for _ in 0..steps {
            step(&mut state);
        }
        state
    }

    #[test]
    fn test_write_trajectories_rows() {
        let state = stepped_state(3);
        let mut buffer = Vec::new();
        write_trajectories(&mut buffer, &state).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "time(s),target_x(km),target_y(km),interceptor_x(km),interceptor_y(km)"
        );
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0.1,5.0,"));
    }

    #[test]
    fn test_empty_run_writes_nothing() {
        let state = reset(&ScenarioConfig::default(), &LaunchParameters::default());
        let mut buffer = Vec::new();
        write_trajectories(&mut buffer, &state).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_save_trajectories_to_file() {
        let state = stepped_state(10);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        save_trajectories(&path, &state).unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
    }
}
