// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;
use tracing::debug;

use crate::config::Settings;
use crate::simulation::error::LoadError;

/// シナリオ設定の読み込み
///
/// 記載のない項目は既定値となる。読み込んだ設定全体を検証してから返す。
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, LoadError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: shown.clone(),
        source,
    })?;
    let settings: Settings = from_reader(file).map_err(|source| LoadError::Parse {
        path: shown.clone(),
        source,
    })?;
    settings.validate()?;

    debug!("設定ファイルを読み込みました: {}", shown);
    Ok(settings)
}
