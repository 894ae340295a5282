use anyhow::Result;
use funarray::cli::Cli;
use funarray::runner;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    for line in runner::run(&cli.command)? {
        println!("{}", line);
    }

    Ok(())
}
