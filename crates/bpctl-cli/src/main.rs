use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use bpctl_api::{ApiSettings, PlatformClient};
use bpctl_core::constants::{CONFIG_FILE, ENV_API_KEY, ENV_API_URL, ENV_APP};
use bpctl_core::{BpctlConfig, BuildpackCommand, CommandError, ErrorKind, Report};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod executor;
mod styles;

use styles as s;

/// The command-line interface for bpctl.
#[derive(Debug, Parser)]
#[command(name = "bpctl")]
#[command(version)]
#[command(styles = s::get_clap_styles())]
#[command(
    help_template = "{bin} {version}\n\n{about-with-newline}{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
#[command(about = "Manage the ordered buildpacks of an app")]
#[command(
    long_about = "bpctl edits the ordered list of buildpacks used when an app is next released.
The list is always fetched fresh and replaced as a whole.

Commands:
  buildpacks           Display the buildpack URLs for an app
  buildpacks:set       Set a buildpack, overwriting at --index if one is there
  buildpacks:add       Add a buildpack, inserting at --index or appending
  buildpacks:remove    Remove a buildpack by URL or by --index
  buildpacks:clear     Clear all buildpacks set on the app
"
)]
#[command(
    after_help = "\x1b[1;32mExamples:\x1b[0m\n  \x1b[36mbpctl buildpacks -a example\x1b[0m\n  \x1b[36mbpctl buildpacks:add -i 1 https://github.com/heroku/heroku-buildpack-ruby\x1b[0m\n  \x1b[36mbpctl buildpacks:remove -i 2\x1b[0m\n  \x1b[36mbpctl buildpacks:clear\x1b[0m"
)]
pub(crate) struct Cli {
    /// Command in canonical form, for example: `buildpacks`, `buildpacks:add`, `remove`
    command: Option<String>,
    /// Buildpack URL for set, add and remove.
    url: Option<String>,
    /// The 1-based index of the URL in the list of URLs.
    #[arg(short, long, allow_negative_numbers = true)]
    index: Option<i64>,
    /// App to run the command against.
    #[arg(short, long)]
    app: Option<String>,
    /// Path to bpctl config file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();
    debug!("parsed cli arguments: {:?}", cli);

    let color = s::stderr_is_terminal();
    match run(&cli) {
        Ok(report) => {
            print_report(&report, color);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", s::error_line(&format!("{err:#}"), color));
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let command_name = match &cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(Report::default());
        }
    };

    let command = BuildpackCommand::from_str(command_name)
        .map_err(|e| anyhow!("failed to parse command '{}': {e}", command_name))?;
    let op = executor::operation_for(cli, command)?;

    let cfg = BpctlConfig::load_or_default(&cli.config)
        .with_context(|| format!("unable to load config '{}'", cli.config))?;
    let app = resolve_app(cli.app.as_deref(), std::env::var(ENV_APP).ok(), &cfg)?;

    let mut settings = ApiSettings::from(&cfg.api);
    if let Ok(url) = std::env::var(ENV_API_URL) {
        debug!("using API url from {}: {}", ENV_API_URL, url);
        settings.base_url = url;
    }
    let token = std::env::var(ENV_API_KEY).ok();
    if token.is_none() {
        debug!("{} not set, sending unauthenticated requests", ENV_API_KEY);
    }
    let platform = PlatformClient::new(settings, token);

    executor::run(&platform, &app, op.as_ref(), &cfg.output.release_hint)
}

/// Picks the app: `--app`, then the environment, then the config default.
fn resolve_app(flag: Option<&str>, env: Option<String>, cfg: &BpctlConfig) -> Result<String> {
    flag.map(ToOwned::to_owned)
        .or(env)
        .or_else(|| cfg.app.default.clone())
        .filter(|app| !app.trim().is_empty())
        .ok_or_else(|| {
            CommandError::Usage(format!(
                "No app specified. Run this command with --app APP, set {ENV_APP}, or set [app].default in {CONFIG_FILE}."
            ))
            .into()
        })
}

/// Usage mistakes exit with 2, every other failure with 1.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CommandError>().map(CommandError::kind) {
        Some(ErrorKind::Usage) => 2,
        _ => 1,
    }
}

fn print_report(report: &Report, color: bool) {
    for line in &report.lines {
        println!("{line}");
    }
    for warning in &report.warnings {
        eprintln!("{}", s::warning_line(warning, color));
    }
}
