use anyhow::Result;
use clap::Parser;
use tracing::debug;

use dsa_lab::cli::{Cli, Commands};
use dsa_lab::demos;
use dsa_lab::system::{AppConfig, init_logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::get();
    let _guard = init_logging(config);
    debug!("configuration loaded: {:?}", config);

    let interactive = !cli.demo_only;

    let result = match cli.command {
        Commands::Brackets => demos::brackets::run(interactive),
        Commands::Postfix => demos::postfix::run(interactive),
        Commands::ReverseList => demos::linked_list::run(interactive),
        Commands::DoublyList => demos::doubly_linked::run(interactive),
        Commands::Traverse => demos::graph_traversal::run(interactive),
        Commands::Heap => demos::heaps::run(interactive),
        Commands::Dijkstra => demos::dijkstra::run(interactive),
        Commands::Sort => demos::sorting::run(config, interactive),
    };

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
