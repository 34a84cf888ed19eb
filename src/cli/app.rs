//! Main CLI application

use crate::calc::{format_value, Operation, Request};
use crate::cli::completion::write_completions;
use crate::config::{
    config_path_from_env, load_config, precision_from_env, Overrides, Settings, MAX_PRECISION,
};
use crate::error::{CalcResult, Result};
use crate::ui::{Context as OutputContext, Verbosity};
use anyhow::Context as _;
use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::io::{self, Write};
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// Resolved settings
    settings: Settings,
    /// Diagnostics output
    ctx: OutputContext,
}

impl App {
    /// Create an app from already resolved settings
    pub fn new(settings: Settings) -> Self {
        let ctx = OutputContext::new()
            .with_verbosity(settings.verbosity)
            .with_color(settings.color);
        App { settings, ctx }
    }

    /// Load settings for the parsed command line
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let overrides = get_overrides(matches);
        let explicit = matches
            .get_one::<PathBuf>("file")
            .cloned()
            .or_else(config_path_from_env);

        let (config, source) = load_config(explicit.as_deref())?;
        let env_precision = precision_from_env()?;

        let settings = Settings::resolve(&config, source, env_precision, &overrides);
        Ok(App::new(settings))
    }

    /// Settings this app was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluate one request and write the single output line
    pub fn run<W: Write>(&self, request: &Request, out: &mut W) -> Result<()> {
        self.ctx.apply_color_choice();

        match &self.settings.source {
            Some(path) => self
                .ctx
                .print_debug(&format!("Using settings from {}", path.display())),
            None => self.ctx.print_debug("No settings file found, using defaults"),
        }
        self.ctx.print_debug(&format!(
            "Dispatching {}({}, {})",
            request.operation, request.lhs, request.rhs
        ));

        let outcome = request.evaluate();
        match &outcome {
            Ok(value) if !value.is_finite() => self.ctx.print_warn(&format!(
                "{} produced a non-finite result",
                request.operation
            )),
            Err(err) => self
                .ctx
                .print_debug(&format!("{} failed: {}", request.operation, err)),
            Ok(_) => {}
        }

        writeln!(out, "{}", render(&outcome, self.settings.precision))?;
        Ok(())
    }
}

/// Usage line; the positionals are only optional next to `--completions`
const USAGE: &str = "calculator [OPTIONS] <OPERATION> <NUM1> <NUM2>
       calculator --completions <SHELL>";

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("calculator")
        .version(crate::VERSION)
        .about("CLI Calculator")
        .override_usage(USAGE)
        .arg(
            Arg::new("operation")
                .value_name("OPERATION")
                .help(format!(
                    "Operation to perform {{{}}}",
                    Operation::ALL.map(Operation::name).join(",")
                ))
                .value_parser(parse_operation)
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("num1")
                .value_name("NUM1")
                .help("First number")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("num2")
                .value_name("NUM2")
                .help("Second number")
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to a calculator.yml settings file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("DIGITS")
                .help("Print the result with a fixed number of decimals")
                .value_parser(
                    RangedU64ValueParser::<usize>::new().range(0..=MAX_PRECISION as u64),
                ),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress warnings")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print diagnostic messages to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit")
                .value_parser(value_parser!(Shell))
                .exclusive(true),
        )
}

/// Value parser for the operation argument
fn parse_operation(value: &str) -> std::result::Result<Operation, String> {
    value
        .parse::<Operation>()
        .map_err(|_| format!("invalid choice: '{}' (choose from {})", value, Operation::choices()))
}

/// Get verbosity override from matches
fn get_verbosity(matches: &ArgMatches) -> Option<Verbosity> {
    if matches.get_flag("quiet") {
        Some(Verbosity::Quiet)
    } else if matches.get_flag("verbose") {
        Some(Verbosity::Verbose)
    } else {
        None
    }
}

/// Collect the settings overrides given on the command line
fn get_overrides(matches: &ArgMatches) -> Overrides {
    Overrides {
        precision: matches.get_one::<usize>("precision").copied(),
        verbosity: get_verbosity(matches),
        no_color: matches.get_flag("no-color"),
    }
}

/// Build the request from parsed positional arguments
pub fn request_from_matches(matches: &ArgMatches) -> Option<Request> {
    let operation = matches.get_one::<Operation>("operation").copied()?;
    let lhs = matches.get_one::<f64>("num1").copied()?;
    let rhs = matches.get_one::<f64>("num2").copied()?;
    Some(Request::new(operation, lhs, rhs))
}

/// Render the output line for an evaluated request
pub fn render(outcome: &CalcResult<f64>, precision: Option<usize>) -> String {
    match outcome {
        Ok(value) => format!("Result: {}", format_value(*value, precision)),
        Err(err) => format!("Error: {}", err.message()),
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Usage errors exit here with status 2
    let matches = build_command().get_matches();

    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        write_completions(shell, &mut io::stdout());
        return Ok(());
    }

    let app = App::from_matches(&matches).context("failed to load settings")?;
    let request = request_from_matches(&matches).context("missing operation or operands")?;

    let stdout = io::stdout();
    app.run(&request, &mut stdout.lock())?;
    Ok(())
}
