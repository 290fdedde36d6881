use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::io::{self, Read};

use extract_file_blocks::ExtractError;
use split_files::config::AppConfig;
use split_files::{logging, run, BlockOutcome};
use write_file_blocks::FsBlockWriter;

fn main() -> Result<()> {
    let matches = Command::new("split_files")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Splits text piped on stdin into files, one per `// path` marker line")
        .arg(
            Arg::new("fail_fast")
                .long("fail-fast")
                .help("Stop at the first file that cannot be written")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = AppConfig::from_cli_and_env(matches.get_flag("fail_fast"), matches.get_flag("verbose"))
        .context("Failed to get current directory")?;
    logging::init(config.verbose);
    log::debug!("{:?}", config);

    let input = read_stdin().context("Failed to read standard input")?;

    let mut writer = FsBlockWriter::new(config.resolver.clone());
    let report = match run(&input, &mut writer, config.failure_policy(), print_outcome) {
        Ok(report) => report,
        Err(ExtractError::EmptyInput) => {
            eprintln!("Error: stdin is empty. Pipe the multi-file text into split_files.");
            std::process::exit(1);
        }
    };

    println!("\nDone! Wrote {} file(s).", report.written_count());

    if report.stopped_early() {
        eprintln!("Stopped after the first failed write (--fail-fast).");
        std::process::exit(1);
    }

    Ok(())
}

fn print_outcome(outcome: &BlockOutcome) {
    match outcome {
        Ok(path) => println!("✅  {}", path.display()),
        Err(err) => eprintln!("❌  {}: {}", err.path().display(), err),
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}
