mod cli;
mod repl;

use anyhow::Context;
use bisect_viewer::{Session, render};
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands, InputArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Run { input, json }) => run(input, json),
        Some(Commands::Step { input }) => step(input),
        None => step(InputArgs::default()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(input: InputArgs, json: bool) -> anyhow::Result<()> {
    let settings = input.settings()?;
    let mut session = Session::new();
    let viewer = session.start(&settings)?;

    if json {
        let report = serde_json::json!({
            "expression": viewer.expression(),
            "bracket": settings.bracket(),
            "tolerance": settings.tolerance,
            "solution": viewer.solution(),
        });
        let text = serde_json::to_string_pretty(&report).context("serializing solution")?;
        println!("{text}");
    } else {
        println!("f(x) = {}\n", viewer.expression());
        println!("{}", render::table(viewer.solution()));
    }
    Ok(())
}

fn step(input: InputArgs) -> anyhow::Result<()> {
    let settings = input.settings()?;
    repl::Stepper::new(settings)
        .run()
        .context("terminal error in the interactive viewer")
}
