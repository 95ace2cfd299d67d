use clap::Parser;

mod commands;
mod handlers;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = handlers::handle_command(cli) {
        log::error!("{err}");
        return Err(err);
    }
    Ok(())
}
