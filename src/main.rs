use std::path::PathBuf;
use std::process::ExitCode;

use phonetic_similarity::config::ExperimentConfig;
use phonetic_similarity::experiment;
use phonetic_similarity::logging::init_tracing;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let mut config = ExperimentConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config.corpus_path = Some(PathBuf::from(path));
    }

    let _log_guard = init_tracing(&config);

    match experiment::run(&config) {
        Ok(report) => {
            for line in report.lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "experiment failed");
            ExitCode::FAILURE
        }
    }
}
