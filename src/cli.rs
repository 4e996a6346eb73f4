use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "Keypad-driven terminal calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an expression such as `12+8*2`
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Press keys from a fresh calculator and print the final display
    Keys {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Read key lines from stdin and show the display after each line
    Repl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_accepts_leading_minus() {
        let cli = Cli::try_parse_from(["zcalc", "eval", "-5+3"]).unwrap();
        match cli.command {
            Some(Commands::Eval { expression }) => assert_eq!(expression, vec!["-5+3"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["zcalc", "--json"]).unwrap();
        assert!(cli.json);
        assert!(cli.command.is_none());
    }
}
