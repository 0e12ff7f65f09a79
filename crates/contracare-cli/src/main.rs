use clap::Parser;
use eyre::Result;

use contracare_cli::cli::{Cli, Settings};
use contracare_cli::{commands, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let settings = Settings::resolve(&cli)?;
    let output = commands::execute(&cli.command, &settings)?;
    print!("{output}");
    Ok(())
}
