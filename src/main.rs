// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use interceptsim::config::Settings;
use interceptsim::simulation::csv::save_trajectories;
use interceptsim::simulation::framework::{reset, run_to_end};
use interceptsim::simulation::load_parameters::load_settings;
use interceptsim::solver::solve;

/// 自由落下目標の迎撃シミュレータ
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// シナリオ設定 (YAML)。省略時は既定値
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// 設定値の上書き（例: --set height=3.0 --set angle=60）
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// 最適な発射パラメータを計算してから実行する
    #[arg(long)]
    solve: bool,

    /// 軌跡の出力先 (CSV)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 最大ステップ数
    #[arg(long, default_value_t = 100_000)]
    max_steps: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 設定の読み込みと上書き
    let mut settings = match &args.scenario {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    for assignment in &args.overrides {
        settings.apply_assignment(assignment)?;
    }

    // 最適化
    if args.solve {
        let solution = solve(&settings.scenario);
        if solution.success {
            info!(
                "目標の落下時間 {:.1} s, 予測迎撃時刻 {:.1} s",
                solution.target_flight_time, solution.intercept_time
            );
            settings.launch = solution.launch;
        } else {
            warn!("現在の発射パラメータのまま実行します");
        }
    }

    // シミュレーションの実行
    let mut state = reset(&settings.scenario, &settings.launch);
    match run_to_end(&mut state, args.max_steps) {
        Some(outcome) if outcome.is_success() => {
            info!("結果: {} ({} ステップ)", outcome, state.target_history().len())
        }
        Some(outcome) => warn!("結果: {} ({} ステップ)", outcome, state.target_history().len()),
        None => warn!("シミュレーションが実行されませんでした"),
    }

    // CSV出力
    if let Some(path) = &args.output {
        save_trajectories(path, &state)?;
        info!("軌跡を書き出しました: {}", path.display());
    }

    Ok(())
}
