use std::process::ExitCode;
use std::time::Instant;

use atoibench::preflight::preflight;
use atoibench::{default_registry, init_logging, HarnessConfig};
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let registry = match default_registry(&config) {
        Ok(registry) => registry,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let reports = preflight(&registry, &config);

    let failed = reports.iter().filter(|report| !report.passed()).count();
    for report in &reports {
        let verdict = match &report.outcome {
            Ok(()) => "ok".to_owned(),
            Err(err) => format!("FAILED: {err}"),
        };
        println!("{:<12} digits={:<2} {verdict}", report.competitor, report.digits);
    }
    println!(
        "Checked {} cases in {:?}, {failed} failed",
        reports.len(),
        start.elapsed()
    );

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
