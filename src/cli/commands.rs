use crate::errors::CliError;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Insert { amounts: Vec<f64> },
    Update { day: u32, amounts: Vec<f64> },
    Config,
    Version,
    Help,
}

pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Show);
    };
    match name.as_str() {
        "show" => expect_no_args(name, rest).map(|_| Command::Show),
        "insert" => Ok(Command::Insert {
            amounts: parse_amounts(rest)?,
        }),
        "update" => {
            let (day, amounts) = rest
                .split_first()
                .ok_or_else(|| CliError::Input("update requires a day of the year".into()))?;
            let day = day
                .parse::<u32>()
                .map_err(|_| CliError::Input(format!("`{}` is not a day number", day)))?;
            Ok(Command::Update {
                day,
                amounts: parse_amounts(amounts)?,
            })
        }
        "config" => expect_no_args(name, rest).map(|_| Command::Config),
        "version" | "--version" | "-V" => Ok(Command::Version),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::Command(format!("unknown command `{}`", other))),
    }
}

fn expect_no_args(name: &str, rest: &[String]) -> Result<(), CliError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CliError::Input(format!(
            "`{}` takes no arguments, got {}",
            name,
            rest.join(" ")
        )))
    }
}

fn parse_amounts(raw: &[String]) -> Result<Vec<f64>, CliError> {
    if raw.is_empty() {
        return Err(CliError::Input("at least one sales amount is required".into()));
    }
    raw.iter()
        .map(|value| {
            value
                .replace(',', ".")
                .parse::<f64>()
                .map_err(|_| CliError::Input(format!("`{}` is not a valid amount", value)))
        })
        .collect()
}

pub fn usage() -> &'static str {
    "Usage: sales_pace_cli [command]\n\
     Commands:\n  \
     show                            Print the dashboard (default)\n  \
     insert <amount>...              Record today's sales\n  \
     update <day> <amount>...        Overwrite the sales of a day of the year (1-based)\n  \
     config                          Print the active configuration\n  \
     version                         Print build information\n  \
     help                            Print this message\n\
     Split mode takes two amounts (physical, digital); single mode takes one."
}
