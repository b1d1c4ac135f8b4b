mod cli;
mod config;
mod workflow;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::Config;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG が設定されていればそちらを優先する
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = workflow::run(&config) {
        report(&e);
        return ExitCode::FAILURE;
    }

    println!(
        "変換しました: {} -> {}",
        config.input.display(),
        config.output.display()
    );
    ExitCode::SUCCESS
}

/// エラーとその原因をすべて標準エラー出力に表示します。
fn report(e: &dyn Error) {
    eprintln!("エラー: {}", e);
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  原因: {}", cause);
        source = cause.source();
    }
}
