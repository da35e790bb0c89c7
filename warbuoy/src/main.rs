use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use warbuoy::commands::{email::EmailCommand, serve::serve, submit::SubmitCommand};
use warbuoy_config::DEFAULT_CONFIG_PATH;
use warbuoy_utils::warbuoy_version;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    if let Command::Submit(command) = cli.command {
        return command.invoke().await;
    }

    let config = warbuoy_config::load(cli.config.as_slice()).context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Email { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Submit(_) | Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = warbuoy_version())]
struct Cli {
    /// Config files to load, later files override earlier ones
    #[arg(
        long,
        global = true,
        env = "WARBUOY_CONFIG",
        value_delimiter = ':',
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server that receives contact form submissions
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Submit a lead like the website's contact form does
    #[command(aliases(["lead"]))]
    Submit(SubmitCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn submit_restricts_budget() {
        let result = Cli::try_parse_from([
            "warbuoy", "submit", "--name", "Jo", "--email", "jo@x.com", "--message", "Hi",
            "--budget", "a lot",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "warbuoy", "submit", "--name", "Jo", "--email", "jo@x.com", "--message", "Hi",
            "--budget", "$10k+/mo", "--service", "Ads", "--service", "Email/SMS",
        ]);
        assert!(result.is_ok());
    }
}
