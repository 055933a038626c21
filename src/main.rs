use chili_room::cli::Cli;
use chili_room::output::Printer;
use clap::Parser;
use env_logger::Env;
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    chili_room::cli::run(cli, &Printer::new())?;

    Ok(())
}
