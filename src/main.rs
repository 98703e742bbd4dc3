use clap::Parser;
use model_serve::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::CarPrice => cli::car_price::run().await,
        Command::Placement => cli::placement::run().await,
    }
}
