use clap::Parser;
use env_logger::Env;
use tokio::io::{self, BufReader};

use caesar_cli::config::{Cli, PromptDefaults};
use caesar_cli::error::Result;
use caesar_cli::session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp_micros()
        .init();

    let mut session = Session::new(
        BufReader::new(io::stdin()),
        io::stdout(),
        PromptDefaults::from(&cli),
    );

    session.run().await
}
