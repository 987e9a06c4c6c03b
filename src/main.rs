use anyhow::Result;
use clap::Parser;
use std::env;
use tidydesk::cli::Cli;
use tidydesk::tui;

fn main() -> Result<()> {
    // No arguments: go straight to the interactive TUI
    let args: Vec<String> = env::args().collect();
    if args.len() == 1 {
        return tui::run(None);
    }

    let cli = Cli::parse();
    cli.run()
}
