//! Command dispatch and the interactive prompt

use std::io::{self, BufRead};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::domain::{run_conversion, to_base, validate, NumeralSystem};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Convert {
            number,
            from,
            to,
            steps,
        }) => _convert(number, *from, *to, *steps, settings),
        Some(Commands::Info { number, from }) => _info(number, *from),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _interactive(settings),
    }
}

#[instrument(skip(settings))]
fn _convert(
    number: &str,
    from: Option<NumeralSystem>,
    to: Option<NumeralSystem>,
    steps: bool,
    settings: &Settings,
) -> CliResult<()> {
    let source = from.unwrap_or(settings.default_source);
    let target = to.unwrap_or(settings.default_target);
    debug!("number: {:?}, source: {}, target: {}", number, source, target);

    let result = run_conversion(number.trim(), source, target);
    match result.error {
        Some(e) => Err(CliError::Conversion(e)),
        None => {
            output::info(&result.output);
            if steps || settings.show_steps {
                output::header(&format!("Steps ({}):", result.algorithm));
                for step in &result.steps {
                    output::detail(step);
                }
            }
            Ok(())
        }
    }
}

#[instrument]
fn _info(number: &str, from: Option<NumeralSystem>) -> CliResult<()> {
    let number = number.trim();
    let source = from.unwrap_or_else(|| NumeralSystem::detect(number));
    debug!("number: {:?}, source: {}", number, source);

    let value = validate(number, source)?;
    print_info(number, source, value);
    Ok(())
}

/// Info block shared by `info` and the interactive prompt.
fn print_info(number: &str, source: NumeralSystem, value: u128) {
    output::header(&format!("{} ({})", number, source));
    for target in NumeralSystem::ALL {
        let digits = to_base(value, target.base());
        output::detail(&format!(
            "{:12} {}{} ({} digits)",
            target.name(),
            target.prefix(),
            digits,
            digits.len()
        ));
    }
    output::detail(&format!("{:12} {}", "bits", to_base(value, 2).len()));
}

/// Read-eval-print loop: one numeral per line, source detected from its
/// prefix. Underscore separators are allowed.
#[instrument(skip(settings))]
fn _interactive(settings: &Settings) -> CliResult<()> {
    output::info("numbase interactive mode ('q' to quit)");
    let stdin = io::stdin();
    loop {
        output::prompt(">");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }
        let raw = line.replace('_', "");
        let raw = raw.trim();
        match raw {
            "" => continue,
            "q" | "quit" | "exit" => return Ok(()),
            _ => {}
        }

        let source = NumeralSystem::detect(raw);
        match validate(raw, source) {
            Ok(value) => {
                print_info(raw, source, value);
                if settings.show_steps {
                    let result = run_conversion(raw, source, settings.default_target);
                    for step in &result.steps {
                        output::detail(step);
                    }
                }
            }
            // Recoverable: report and keep prompting
            Err(e) => output::error(&e),
        }
    }
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load(None)?;
    output::info(&settings.to_toml());
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let path = config::init_global_config()?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match config::global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not created)" };
            output::info(&format!("{}{}", path.display(), marker));
            Ok(())
        }
        None => Err(CliError::Config(crate::config::SettingsError::NoConfigDir)),
    }
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
