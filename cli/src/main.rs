mod config;
mod report;
mod schema;

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use sea_orm::DbBackend;
use tracing::info;

use crate::{
    config::{AppConfig, ReportFormat},
    report::{check_records, parse_records},
};

#[derive(Parser, Debug)]
#[command(name = "employee-cli", version, about = "Employee record checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate employee records read from a JSON file.
    Validate(ValidateCommand),
    /// Print the employees table declaration.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ValidateCommand {
    #[arg(value_name = "FILE", help = "JSON object or array of objects; `-` reads stdin")]
    input: PathBuf,
    #[arg(long, value_enum, help = "Overrides EMPLOYEE_REPORT_FORMAT")]
    format: Option<ReportFormat>,
    #[arg(long, help = "Stop at the first invalid record")]
    fail_fast: bool,
}

impl ValidateCommand {
    /// Flags win over the environment.
    fn options(&self, config: &AppConfig) -> (ReportFormat, bool) {
        (
            self.format.unwrap_or(config.report_format),
            self.fail_fast || config.fail_fast,
        )
    }
}

fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    run(Cli::parse(), AppConfig::load)
}

fn run(cli: Cli, load_config: impl FnOnce() -> Result<AppConfig>) -> Result<()> {
    match cli.command {
        Command::Validate(cmd) => run_validate(cmd, &load_config()?),
        Command::SchemaPrint { output } => schema_print(output),
    }
}

fn run_validate(cmd: ValidateCommand, config: &AppConfig) -> Result<()> {
    let (format, fail_fast) = cmd.options(config);

    let raw = read_input(&cmd.input, io::stdin())?;
    let drafts = parse_records(&raw)
        .with_context(|| format!("failed to read employees from {}", cmd.input.display()))?;
    let report = check_records(&drafts, fail_fast);
    println!("{}", report.render(format)?);

    info!(
        checked = report.checked(),
        invalid = report.invalid(),
        skipped = report.skipped(),
        "employee validation finished"
    );
    if report.invalid() > 0 {
        bail!(
            "{} of {} employee records failed validation",
            report.invalid(),
            report.checked()
        );
    }
    Ok(())
}

fn read_input(path: &Path, mut stdin: impl Read) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn schema_print(output: Option<PathBuf>) -> Result<()> {
    let sql = schema::table_declaration(DbBackend::Postgres);
    match output {
        Some(path) => {
            std::fs::write(&path, format!("{sql};\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "table declaration written");
        }
        None => println!("{sql};"),
    }
    Ok(())
}
