use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "relsql.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Init,
    Check,
    Ddl,
    Drop,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Init(InitArgs),
    Check(SchemaArgs),
    Ddl(ScriptArgs),
    Drop(ScriptArgs),
}

#[derive(Debug, Clone)]
pub struct InitArgs {
    pub config: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SchemaArgs {
    pub config: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ScriptArgs {
    pub config: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    let rest = it.map(|s| s.as_str());
    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "init" => parse_init(rest),
        "check" => parse_check(rest),
        "ddl" => parse_script(rest, HelpTopic::Ddl, Command::Ddl),
        "drop" => parse_script(rest, HelpTopic::Drop, Command::Drop),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

/// Try to consume a `--config` option; returns true when `token` was one.
fn take_config<'a>(
    token: &str,
    it: &mut impl Iterator<Item = &'a str>,
    config: &mut PathBuf,
) -> anyhow::Result<bool> {
    if token == "--config" {
        let Some(v) = it.next() else {
            anyhow::bail!("--config requires a value");
        };
        *config = PathBuf::from(v);
        return Ok(true);
    }
    if let Some(v) = token.strip_prefix("--config=") {
        *config = PathBuf::from(v);
        return Ok(true);
    }
    Ok(false)
}

fn parse_init<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Init)),
            _ if take_config(token, &mut it, &mut config)? => {}
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Command::Init(InitArgs { config }))
}

fn parse_check<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Check)),
            _ if take_config(token, &mut it, &mut config)? => {}
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Command::Check(SchemaArgs { config }))
}

fn parse_script<'a>(
    mut it: impl Iterator<Item = &'a str>,
    topic: HelpTopic,
    command: fn(ScriptArgs) -> Command,
) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut output: Option<PathBuf> = None;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(topic)),
            "-o" | "--output" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--output requires a value");
                };
                output = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--output=") => {
                output = Some(PathBuf::from(token.trim_start_matches("--output=")));
            }
            _ if take_config(token, &mut it, &mut config)? => {}
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(command(ScriptArgs { config, output }))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
relsql - schema DDL tool for relsql

USAGE:
  relsql <COMMAND> [OPTIONS]

COMMANDS:
  init          Write a starter schema config
  check         Validate a schema config
  ddl           Print CREATE statements for every table and index
  drop          Print DROP statements for every index and table

Run `relsql <command> --help` for more."
            );
        }
        HelpTopic::Init => {
            println!(
                "\
USAGE:
  relsql init [OPTIONS]

OPTIONS:
  --config <FILE>       Config file to create (default: relsql.toml)
  -h, --help            Print help"
            );
        }
        HelpTopic::Check => {
            println!(
                "\
USAGE:
  relsql check [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: relsql.toml)
  -h, --help            Print help"
            );
        }
        HelpTopic::Ddl => {
            println!(
                "\
USAGE:
  relsql ddl [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: relsql.toml)
  -o, --output <FILE>   Write the script to a file instead of stdout
  -h, --help            Print help"
            );
        }
        HelpTopic::Drop => {
            println!(
                "\
USAGE:
  relsql drop [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: relsql.toml)
  -o, --output <FILE>   Write the script to a file instead of stdout
  -h, --help            Print help"
            );
        }
    }
}
