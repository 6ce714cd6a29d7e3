use std::process::ExitCode;

use clap::Parser;
use dir_analyzer_cli::cli::Cli;
use dir_analyzer_cli::commands::analyze::{analyze_dir_with_config, scan_report};
use dir_analyzer_cli::presentation::render_pretty;
use dir_analyzer_common::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging("info");
    let cli = Cli::parse();

    match run(cli).await {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, String> {
    let config = cli.to_config().map_err(|e| e.to_string())?;
    let limit = cli.effective_limit();
    if cli.json {
        analyze_dir_with_config(cli.dir, limit, config).await
    } else {
        let report = scan_report(cli.dir, limit, config).await?;
        Ok(render_pretty(&report))
    }
}
