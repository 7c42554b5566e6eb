//! Heronet CLI — superhero network analysis over CSV files.
//!
//! Usage:
//!   heronet [--data-dir path] [--heroes path] [--links path] [COMMAND]
//!
//! Without a command, an interactive numbered menu is shown.

use clap::{Parser, Subcommand};
use heronet::{CsvStore, HeroNetwork, NetworkError, QueryError, StoreConfig};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Window for the "recently added" view, in days.
const RECENT_WINDOW_DAYS: u64 = 3;
/// How many heroes the most-connected ranking shows.
const TOP_CONNECTED: usize = 3;

#[derive(Parser)]
#[command(
    name = "heronet",
    version,
    about = "Interactive superhero network analysis"
)]
struct Cli {
    /// Directory holding superheroes.csv and links.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Path to the heroes CSV file (overrides --data-dir)
    #[arg(long)]
    heroes: Option<PathBuf>,
    /// Path to the links CSV file (overrides --data-dir)
    #[arg(long)]
    links: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts, recent additions, and the most connected heroes
    Stats,
    /// Show when a hero was added and who they are connected to
    Report {
        /// Hero name (exact match)
        name: String,
    },
    /// Render the network as an adjacency listing
    Graph,
    /// Add a new hero dated today
    AddHero {
        /// Name for the new hero
        name: String,
    },
    /// Add a connection between two heroes by name
    AddLink {
        /// First hero name
        name1: String,
        /// Second hero name
        name2: String,
    },
}

/// Get the default data directory (~/.local/share/heronet)
fn default_data_dir() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    let dir = data_dir.join("heronet");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn store_config(cli: &Cli) -> StoreConfig {
    let mut config = StoreConfig::in_dir(
        cli.data_dir.clone().unwrap_or_else(default_data_dir),
    );
    if let Some(heroes) = &cli.heroes {
        config.heroes_path = heroes.clone();
    }
    if let Some(links) = &cli.links {
        config.links_path = links.clone();
    }
    config
}

fn open_network(config: StoreConfig) -> Result<HeroNetwork, NetworkError> {
    let store = CsvStore::new(config);
    HeroNetwork::load(Arc::new(store))
}

fn cmd_stats(network: &HeroNetwork) -> i32 {
    let stats = network.stats();
    println!("Total superheroes: {}", stats.heroes);
    println!("Total connections: {}", stats.links);

    let today = chrono::Local::now().date_naive();
    let recent = network.recent_heroes(today, RECENT_WINDOW_DAYS);
    println!("\nSuperheroes added in the last {} days:", RECENT_WINDOW_DAYS);
    if recent.is_empty() {
        println!("  (none)");
    } else {
        for hero in recent {
            println!("  - {} (added on {})", hero.name, hero.created_at);
        }
    }

    println!("\nTop {} most connected superheroes:", TOP_CONNECTED);
    match network.top_connected(TOP_CONNECTED) {
        Ok(ranked) => {
            if ranked.is_empty() {
                println!("  (no connections yet)");
            }
            for entry in ranked {
                println!("  - {} with {} connections", entry.name, entry.degree);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_report(network: &HeroNetwork, name: &str) -> i32 {
    match network.hero_report(name) {
        Ok(report) => {
            println!("{}", report.name);
            println!("  Added on: {}", report.created_at);
            if report.friends.is_empty() {
                println!("  No friends found.");
            } else {
                println!("  Friends: {}", report.friends.join(", "));
            }
            0
        }
        Err(NetworkError::Query(QueryError::HeroNotFound(name))) => {
            println!("'{}' not found in the superhero list.", name);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Text rendering of the network: one line per hero with its neighbors.
///
/// Presentation only; dangling neighbor ids are shown as `#id` rather
/// than failing the view.
fn cmd_graph(network: &HeroNetwork) -> i32 {
    if network.heroes().is_empty() {
        println!("The network is empty.");
        return 0;
    }
    for hero in network.heroes() {
        let neighbors = network.index().neighbors(hero.id);
        let labels: Vec<String> = neighbors
            .iter()
            .map(|&id| {
                network
                    .heroes()
                    .iter()
                    .find(|h| h.id == id)
                    .map(|h| h.name.clone())
                    .unwrap_or_else(|| format!("#{}", id))
            })
            .collect();
        if labels.is_empty() {
            println!("{} (no connections)", hero.name);
        } else {
            println!("{} -- {}", hero.name, labels.join(", "));
        }
    }
    0
}

fn cmd_add_hero(network: &mut HeroNetwork, name: &str) -> i32 {
    if name.is_empty() {
        eprintln!("Error: hero name must not be empty");
        return 1;
    }
    match network.add_hero(name) {
        Ok(id) => {
            println!("Superhero '{}' added with id {}.", name, id);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_add_link(network: &mut HeroNetwork, name1: &str, name2: &str) -> i32 {
    match network.add_link(name1, name2) {
        Ok(_) => {
            println!("Connection added between {} and {}.", name1, name2);
            0
        }
        Err(NetworkError::Mutate(e)) => {
            println!("{}. No connection added.", e);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Prompt for one line of input, trimmed
fn prompt(label: &str) -> std::io::Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The interactive numbered menu. Every iteration reloads from disk so
/// external edits to the CSV files are picked up. Returns the process
/// exit code.
fn run_menu(network: &mut HeroNetwork) -> i32 {
    loop {
        println!("\n==== Superhero Network Menu ====");
        println!("1. Show basic stats");
        println!("2. Hero report");
        println!("3. Show network graph");
        println!("4. Add new superhero");
        println!("5. Add new connection");
        println!("6. Exit");

        let choice = match prompt("Choose an option (1-6): ") {
            Ok(choice) => choice,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return 1;
            }
        };

        if let Err(e) = network.reload() {
            eprintln!("Error: {}", e);
            continue;
        }

        match choice.as_str() {
            "1" => {
                cmd_stats(network);
            }
            "2" => match prompt("Enter superhero name: ") {
                Ok(name) => {
                    cmd_report(network, &name);
                }
                Err(e) => eprintln!("Error reading input: {}", e),
            },
            "3" => {
                cmd_graph(network);
            }
            "4" => match prompt("Enter new superhero name: ") {
                Ok(name) => {
                    cmd_add_hero(network, &name);
                }
                Err(e) => eprintln!("Error reading input: {}", e),
            },
            "5" => {
                let names = prompt("Enter first superhero name: ")
                    .and_then(|a| prompt("Enter second superhero name: ").map(|b| (a, b)));
                match names {
                    Ok((name1, name2)) => {
                        cmd_add_link(network, &name1, &name2);
                    }
                    Err(e) => eprintln!("Error reading input: {}", e),
                }
            }
            "6" => {
                println!("Exiting.");
                return 0;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let mut network = match open_network(store_config(&cli)) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Some(Commands::Stats) => cmd_stats(&network),
        Some(Commands::Report { name }) => cmd_report(&network, &name),
        Some(Commands::Graph) => cmd_graph(&network),
        Some(Commands::AddHero { name }) => cmd_add_hero(&mut network, &name),
        Some(Commands::AddLink { name1, name2 }) => cmd_add_link(&mut network, &name1, &name2),
        None => run_menu(&mut network),
    };
    std::process::exit(code);
}
