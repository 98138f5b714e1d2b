//! Terminal front end: parses a command, runs one ledger round trip and
//! prints the refreshed dashboard.

pub mod commands;
pub mod output;

use std::{
    env,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::info;

use crate::{
    config::{ConfigManager, GoalConfig, SalesConfig},
    core::{
        services::SalesService,
        time::{Clock, FixedClock, SystemClock},
        utils::app_data_dir,
    },
    currency::{CurrencyCode, DateLocale, NumberFormat},
    errors::{CliError, LedgerError},
    ledger::ChannelSales,
    storage::CsvLedgerStore,
    utils::build_info,
};

pub use commands::{parse_args, usage, Command};
use output::{render_dashboard, style, MessageKind, Presentation};

const TODAY_ENV: &str = "SALES_PACE_TODAY";

/// Resolved startup state: validated goal plus presentation preferences.
pub struct CliContext {
    base_dir: PathBuf,
    config: SalesConfig,
    goal: GoalConfig,
    presentation: Presentation,
}

impl CliContext {
    /// Loads (or creates) the config under `base_dir` and validates it.
    pub fn load(base_dir: &Path, color: bool) -> Result<Self, CliError> {
        let manager = ConfigManager::with_base_dir(base_dir)?;
        if !manager.path().try_exists().map_err(LedgerError::from)? {
            manager.save(&SalesConfig::default())?;
            info!("wrote default configuration to {}", manager.path().display());
        }
        let config = manager.load()?;
        let goal = config.validate()?;
        let locale = DateLocale::from_tag(&config.locale).ok_or_else(|| {
            LedgerError::Config(format!("unsupported locale `{}`", config.locale))
        })?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            presentation: Presentation {
                currency: CurrencyCode::new(config.currency.clone()),
                numbers: NumberFormat::default(),
                locale,
                color,
            },
            config,
            goal,
        })
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.config.ledger_path(&self.base_dir)
    }

    fn service(&self, clock: Box<dyn Clock>) -> SalesService {
        let store = CsvLedgerStore::new(
            self.ledger_path(),
            self.goal.range(),
            self.config.channel_mode,
        );
        SalesService::new(Box::new(store), clock, self.goal)
    }
}

/// Entry point used by the `sales_pace_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let color = env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    run_with_args(&args, &app_data_dir(), clock_from_env()?, color, &mut stdout)
}

/// Prints `err` to stderr, coloured when stderr is a terminal.
pub fn report_error(err: &CliError) {
    let color = env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal();
    eprintln!("{}", style(MessageKind::Error, err, color));
}

/// Runs one command against the data under `base_dir`, writing to `out`.
pub fn run_with_args(
    args: &[String],
    base_dir: &Path,
    clock: Box<dyn Clock>,
    color: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let command = parse_args(args)?;
    match command {
        Command::Help => return write_out(out, &format!("{}\n", usage())),
        Command::Version => {
            return write_out(out, &format!("{}\n", build_info::current().summary()))
        }
        _ => {}
    }

    let context = CliContext::load(base_dir, color)?;
    if command == Command::Config {
        return write_out(out, &describe_config(&context));
    }

    let service = context.service(clock);
    let mode = context.config.channel_mode;
    match command {
        Command::Insert { amounts } => {
            let sales = ChannelSales::from_amounts(mode, &amounts)?;
            service.insert_today(sales)?;
            let message = format!("Sales inserted for {}.", service.today());
            write_out(out, &format!("{}\n", style(MessageKind::Success, message, color)))?;
        }
        Command::Update { day, amounts } => {
            let sales = ChannelSales::from_amounts(mode, &amounts)?;
            service.update_day(day, sales)?;
            let message = format!("Sales updated for day {}.", day);
            write_out(out, &format!("{}\n", style(MessageKind::Success, message, color)))?;
        }
        _ => {}
    }

    let view = service.dashboard(context.presentation.locale)?;
    write_out(out, &render_dashboard(&view, &context.presentation))
}

fn describe_config(context: &CliContext) -> String {
    let range = context.goal.range();
    format!(
        "annual target: {}\nrange: {}..={} ({} days)\nchannel mode: {}\nlocale: {}\nledger file: {}\n",
        context.presentation.money(context.goal.annual_target()),
        range.start,
        range.end,
        range.total_days(),
        context.config.channel_mode,
        context.presentation.locale,
        context.ledger_path().display()
    )
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                CliError::Input(format!("{} must be YYYY-MM-DD, got `{}`", TODAY_ENV, raw))
            })?;
            Ok(Box::new(FixedClock::new(date)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}

fn write_out(out: &mut dyn Write, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes())
        .map_err(|err| CliError::Core(err.into()))
}
