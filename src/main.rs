use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zcalc::cli::{Cli, Commands};
use zcalc::config::Config;
use zcalc::run;
use zcalc::ui::{ScreenFormat, TerminalScreen};

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config.log_filter.as_deref().unwrap_or("warn"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config);
    tracing::debug!(?config, "loaded configuration");

    let format = if cli.json {
        ScreenFormat::Json
    } else {
        ScreenFormat::Plain
    };
    let keypad = config.keypad()?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Eval { expression } => {
            run::eval(&expression.join(""), cli.json, &mut io::stdout())
        }
        Commands::Keys { keys } => {
            let mut screen = TerminalScreen::new(io::stdout(), format);
            run::keys(&keys.join(" "), &keypad, &mut screen)
        }
        Commands::Repl => {
            let mut screen = TerminalScreen::new(io::stdout(), format);
            run::repl(io::stdin().lock(), &keypad, &mut screen, config.history_limit)
        }
    }
}
