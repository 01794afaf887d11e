use clap::Parser;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    fieldtune::logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Train(args) => cli::train::run(args),
        Commands::Inspect { file, model } => cli::inspect::run(file, model),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
