use clap::Parser;
use miette::Result;
use pixseq::cli::{Cli, Commands};
use pixseq::output::Printer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => pixseq::cli::render::run(args, &printer)?,
        Commands::Watch(args) => pixseq::cli::watch::run(args, &printer)?,
        Commands::Sequence(args) => pixseq::cli::sequence::run(args)?,
        Commands::Validate(args) => pixseq::cli::validate::run(args, &printer)?,
        Commands::Init(args) => pixseq::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pixseq::cli::completions::run(args)?,
    }

    Ok(())
}
