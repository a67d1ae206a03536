use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slotwise", version, about = "Slotwise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Scheduling preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Smart slot suggestions
    Suggest {
        #[command(subcommand)]
        action: commands::suggest::SuggestAction,
    },
    /// Weekly schedule grid
    Grid(commands::grid::GridArgs),
    /// Productivity statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Sample data seeding
    Mock {
        #[command(subcommand)]
        action: commands::mock::MockAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Suggest { action } => commands::suggest::run(action),
        Commands::Grid(args) => commands::grid::run(args),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Mock { action } => commands::mock::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
