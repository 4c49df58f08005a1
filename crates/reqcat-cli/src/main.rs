//! CLI entry point for reqcat.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `reqcat-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use reqcat_app::{
    failure_report, render_plan, run_build, run_explain, run_order, runtime_error_report,
    success_report, write_report, BuildInput, ExplainOutput, OrderFormat,
};
use reqcat_settings::{Overrides, DEFAULT_CONFIG_FILE};
use std::env;
use time::OffsetDateTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "reqcat",
    version,
    about = "Concatenate text files in dependency order"
)]
struct Cli {
    /// Directory to scan; the output is written inside it.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Config TOML, relative to the root. Defaults to reqcat.toml when present.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Override profile (strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Override the source extension (default txt).
    #[arg(long)]
    extension: Option<String>,

    /// Override the output path, relative to the root (default result.txt).
    #[arg(long)]
    output: Option<String>,

    /// What to do with required files that do not exist.
    #[arg(long, value_parser = ["fail", "skip"])]
    missing: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the dependency order and write the concatenated output.
    Build {
        /// Where to write a JSON run report (written on success and failure).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Print the resolved order without writing anything.
    Order {
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Explain a failure code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "cycle_detected").
        code: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Markdown,
}

impl From<FormatArg> for OrderFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OrderFormat::Text,
            FormatArg::Json => OrderFormat::Json,
            FormatArg::Markdown => OrderFormat::Markdown,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match &cli.cmd {
        Commands::Build { report_out } => cmd_build(&cli, report_out.as_deref()),
        Commands::Order { format } => cmd_order(&cli, (*format).into()).unwrap_or_else(|err| {
            eprintln!("reqcat error: {err:#}");
            1
        }),
        Commands::Explain { code } => cmd_explain(code),
    };

    if code != 0 {
        std::process::exit(code);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("REQCAT_LOG").unwrap_or_else(|_| EnvFilter::new("reqcat=warn"));
    let format = env::var("REQCAT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn root_dir(cli: &Cli) -> Utf8PathBuf {
    cli.root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.root.clone())
}

/// Load the config text. A missing default config is fine; a missing explicit one is not.
fn load_config(cli: &Cli, root: &Utf8Path) -> anyhow::Result<String> {
    match &cli.config {
        Some(path) => {
            let path = root.join(path);
            std::fs::read_to_string(&path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let path = root.join(DEFAULT_CONFIG_FILE);
            match std::fs::read_to_string(&path) {
                Ok(text) => Ok(text),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path, "no config file; using profile defaults");
                    Ok(String::new())
                }
                Err(err) => Err(err).with_context(|| format!("read config: {path}")),
            }
        }
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        extension: cli.extension.clone(),
        output: cli.output.clone(),
        missing: cli.missing.clone(),
    }
}

fn cmd_build(cli: &Cli, report_out: Option<&Utf8Path>) -> i32 {
    let started_at = OffsetDateTime::now_utc();
    let root = root_dir(cli);

    let config_text = match load_config(cli, &root) {
        Ok(text) => text,
        Err(err) => {
            if let Some(path) = report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report(path, &report);
            }
            eprintln!("reqcat error: {err:#}");
            return 1;
        }
    };

    let input = BuildInput {
        root: &root,
        config_text: &config_text,
        overrides: overrides(cli),
    };

    match run_build(input) {
        Ok(output) => {
            if let Some(path) = report_out
                && let Err(err) = write_report(path, &success_report(&output, started_at))
            {
                eprintln!("reqcat error: {err:#}");
                return 1;
            }
            println!(
                "reqcat: wrote {} ({} files)",
                output.output_path, output.summary.written
            );
            0
        }
        Err(err) => {
            if let Some(path) = report_out {
                let _ = write_report(path, &failure_report(&err, started_at));
            }
            let code = err.exit_code();
            eprintln!("reqcat error: {:#}", anyhow::Error::new(err));
            code
        }
    }
}

fn cmd_order(cli: &Cli, format: OrderFormat) -> anyhow::Result<i32> {
    let root = root_dir(cli);
    let config_text = load_config(cli, &root)?;

    let input = BuildInput {
        root: &root,
        config_text: &config_text,
        overrides: overrides(cli),
    };

    match run_order(input) {
        Ok(plan) => {
            print!("{}", render_plan(&plan.to_renderable(), format)?);
            Ok(0)
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("reqcat error: {:#}", anyhow::Error::new(err));
            Ok(code)
        }
    }
}

fn cmd_explain(code: &str) -> i32 {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", reqcat_app::format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                reqcat_app::format_not_found(&identifier, available_codes)
            );
            1
        }
    }
}
