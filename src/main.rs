//! layertool CLI - compile layers.xml descriptors
//!
//! Usage: layertool <COMMAND>
//!
//! Commands:
//!   compile  Compile a descriptor and show its layers and selectors
//!   assign   Show which layer resources and libraries belong to
//!   schema   Show the embedded descriptor schema

mod commands;

use anyhow::Result;
use clap::Parser;

use layertool::config::Config;
use layertool::presentation::cli::{Cli, Commands};
use layertool::presentation::{json, logging};

use commands::assign::AssignArgs;
use commands::CommandContext;

fn main() {
    let cli = Cli::parse();
    let json_output = cli.json;

    if let Err(err) = run(cli) {
        print_error(&err, json_output);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default_with_warnings(Some(&working_dir))?;

    logging::init(config.output.verbosity, cli.verbose);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let ctx = CommandContext::new(cli.json, config)?;

    match cli.command {
        Commands::Compile { file } => commands::compile::cmd_compile(&ctx, file.as_deref()),
        Commands::Assign {
            layers,
            resources,
            libraries,
            modules,
        } => commands::assign::cmd_assign(
            &ctx,
            AssignArgs {
                layers: layers.as_deref(),
                resources,
                libraries,
                modules,
            },
        ),
        Commands::Schema => commands::schema::cmd_schema(&ctx),
    }
}

fn print_error(err: &anyhow::Error, json_output: bool) {
    let message = format!("{err:#}");
    if json_output {
        let _ = json::emit(json::error_event(&message));
        return;
    }
    eprintln!("[ERROR] {message}");
}
