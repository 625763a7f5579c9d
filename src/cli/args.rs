//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::NumeralSystem;

/// Number-system converter: validate, convert and inspect binary, octal, decimal and hexadecimal numerals
#[derive(Parser, Debug)]
#[command(name = "numbase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Start the interactive prompt when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a numeral between systems
    Convert {
        /// Numeral to convert (canonical prefix allowed, e.g. 0xFF)
        number: String,

        /// Source system (default from config)
        #[arg(short, long, value_parser = parse_system)]
        from: Option<NumeralSystem>,

        /// Target system (default from config)
        #[arg(short, long, value_parser = parse_system)]
        to: Option<NumeralSystem>,

        /// Print the conversion steps
        #[arg(long)]
        steps: bool,
    },

    /// Show a numeral in all four systems with digit and bit counts
    Info {
        /// Numeral to inspect (source detected from prefix unless --from)
        number: String,

        /// Source system (default: detect from prefix, else decimal)
        #[arg(short, long, value_parser = parse_system)]
        from: Option<NumeralSystem>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init,

    /// Show config path
    Path,
}

/// Parse a numeral system argument (name, short name or base).
fn parse_system(s: &str) -> Result<NumeralSystem, String> {
    s.parse::<NumeralSystem>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_system_arg() {
        assert_eq!(parse_system("oct"), Ok(NumeralSystem::Octal));
        assert!(parse_system("nope").is_err());
    }
}
