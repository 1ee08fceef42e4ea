use crate::config::AppConfig;
use crate::errors::AppError;
use crate::mapping::{mapping_path, Mappings};
use crate::source_file::{read_lines, write_lines};
use crate::substitution::Substitutor;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const EXAMPLE: &str = "Example: tsrg-apply C:\\ForgeMod C:\\ForgeMod\\src\\main\\java\\com\\example\\mod\\ExampleMod.java";

#[derive(Parser, Debug)]
#[command(name = "tsrg-apply", version)]
#[command(about = "Replaces field_/func_ names in a Forge mod source file with their MCP names")]
#[command(after_help = EXAMPLE)]
pub struct Cli {
    /// Path to the ForgeGradle project
    pub project_dir: PathBuf,

    /// Source file to rewrite in place
    pub source_file: PathBuf,

    /// Ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Do not wait for Enter before processing
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// "Press Enter" confirmations, skipped entirely when `assume_yes` is set.
pub struct Prompt<R> {
    input: R,
    assume_yes: bool,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R, assume_yes: bool) -> Self {
        Self { input, assume_yes }
    }

    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        if self.assume_yes {
            return Ok(());
        }
        println!("Press Enter to resume running the utility...");
        // A closed stdin counts as confirmation.
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fields: usize,
    pub functions: usize,
    pub lines: usize,
    pub substitutions: usize,
    pub unresolved: usize,
}

pub fn print_banner() {
    println!("Welcome to tsrg-apply v{}!", env!("CARGO_PKG_VERSION"));
    println!("Designed for Minecraft Forge 1.16.5 and earlier versions to make deobfuscating mods a bit easier");
    println!();
}

/// Loads the project's mappings and rewrites `cli.source_file` with them.
///
/// Nothing is written unless the mapping file and the source file were both
/// read successfully.
pub fn run<R: BufRead>(
    cli: &Cli,
    cfg: &AppConfig,
    prompt: &mut Prompt<R>,
) -> Result<RunSummary, AppError> {
    if let Some(first) = cli.extra.first() {
        println!("Arguments \"{first}\" and so on will be ignored");
        println!("Run the utility with --help to view usage");
        println!();
        prompt.wait_for_enter()?;
    }
    check_arguments(&cli.project_dir, &cli.source_file)?;
    println!("Checked arguments, starting...");

    let mappings = Mappings::load(&mapping_path(&cli.project_dir, &cfg.mapping_path))?;
    println!("Total count of fields: {}", mappings.field_count());
    println!("Total count of [unique] function names: {}", mappings.function_count());
    println!();

    println!("Processing {}...", display_path(&cli.source_file).display());
    println!("Please confirm that you have a backup of this file");
    prompt.wait_for_enter()?;
    println!("Resuming...");

    let source = &cli.source_file;
    let lines = read_lines(source).map_err(|source_err| match source_err.kind() {
        io::ErrorKind::InvalidData => AppError::SourceEncoding(source.clone()),
        _ => AppError::ReadSource {
            path: source.clone(),
            source: source_err,
        },
    })?;
    let report = Substitutor::new(&mappings).substitute_lines(&lines);
    info!(
        lines = report.lines.len(),
        substitutions = report.substitutions,
        unresolved = report.unresolved.len(),
        "Substitution finished"
    );
    if !report.unresolved.is_empty() {
        warn!("{} token occurrences were left obfuscated", report.unresolved.len());
    }

    println!("Writing changes...");
    write_lines(source, &report.lines).map_err(|source_err| AppError::WriteSource {
        path: source.clone(),
        source: source_err,
    })?;
    println!("Done!");
    println!(
        "Rewrote {} lines: {} substitutions, {} unresolved tokens",
        report.lines.len(),
        report.substitutions,
        report.unresolved.len()
    );

    Ok(RunSummary {
        fields: mappings.field_count(),
        functions: mappings.function_count(),
        lines: report.lines.len(),
        substitutions: report.substitutions,
        unresolved: report.unresolved.len(),
    })
}

fn check_arguments(project_dir: &Path, source_file: &Path) -> Result<(), AppError> {
    if !project_dir.is_dir() {
        return Err(AppError::ProjectDir(project_dir.to_path_buf()));
    }
    if !source_file.exists() {
        return Err(AppError::SourceFile(source_file.to_path_buf()));
    }
    Ok(())
}

fn display_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
