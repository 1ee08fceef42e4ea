use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tsrg_apply::cli::{self, Cli, Prompt};
use tsrg_apply::config::load_config;
use tsrg_apply::logger;

fn main() -> ExitCode {
    cli::print_banner();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let cfg = match load_config(&cli.project_dir, cli.yes) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    logger::init_logging(cfg.json_logs);

    let mut prompt = Prompt::new(io::stdin().lock(), cfg.assume_yes);
    match cli::run(&cli, &cfg, &mut prompt) {
        Ok(summary) => {
            info!(
                fields = summary.fields,
                functions = summary.functions,
                lines = summary.lines,
                substitutions = summary.substitutions,
                unresolved = summary.unresolved,
                "Finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
