use clap::{Parser, Subcommand};
use schedule_page::config::{self, ScheduleConfig};
use schedule_page::output;
use schedule_page::pipeline::{self, BuildOptions};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "schedule-page")]
#[command(about = "Render a weekly class schedule into a single HTML page")]
#[command(long_about = "\
Render a weekly class schedule into a single HTML page

Run with no arguments to read schedule.yaml and write index.html.

Schedule structure:

  name: CS101                     # Page heading (default: Schedule)
  semester: Fall 2026             # Subtitle
  week:
    monday:                       # Weekdays are shown Monday → Sunday,
      - time: [\"09:00\", \"10:30\"]  # other keys follow in file order
        lectures:
          - lecture: Intro
            attendees: [Alice, Bob]

Days with no slots are left out. Paths can also be set in schedule.toml;
run 'schedule-page gen-config' for a documented example.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (default: schedule.toml, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Schedule document to read
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// HTML page to write
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load, render and write the page (the default)
    Build,
    /// Validate the schedule document without writing
    Check,
    /// Print a stock schedule.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let options = resolve_options(cli.config, cli.input, cli.output)?;
            let report = pipeline::run(&options)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let options = resolve_options(cli.config, cli.input, cli.output)?;
            println!("==> Checking {}", options.input.display());
            let days = pipeline::check(&options)?;
            output::print_check_output(&days);
            println!("==> Schedule is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }
    Ok(())
}

/// Config file (explicit or default) with command-line overrides applied.
fn resolve_options(
    path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<BuildOptions, config::ConfigError> {
    let base = match path {
        Some(path) => config::read_config(&path)?,
        None => config::load_config(&PathBuf::from(config::DEFAULT_CONFIG_FILE))?,
    };
    let config: ScheduleConfig = base.with_overrides(input, output);
    config.validate()?;
    Ok(BuildOptions::from(&config))
}
