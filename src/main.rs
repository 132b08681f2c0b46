use clap::Parser;
use ridership_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Ridership Analyzer - Transit Route Ridership Analytics");
    println!("======================================================");
    println!();
    println!("Answer aggregate queries over transit-route ridership CSV data and");
    println!("compare the memory profile of eager and lazy execution strategies.");
    println!();
    println!("USAGE:");
    println!("    ridership-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Run the ridership report queries (main command)");
    println!("    memory      Compare peak memory of the eager and lazy strategies");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Run the full report with default queries:");
    println!("    ridership-analyzer report --data data/ctabus.csv");
    println!();
    println!("    # Rank growth over a custom year span, streaming lazily:");
    println!("    ridership-analyzer report --start-year 2005 --end-year 2015 \\");
    println!("                              --strategy lazy");
    println!();
    println!("    # Compare strategy memory on the route 22 demonstration query:");
    println!("    ridership-analyzer memory --data data/ctabus.csv --route 22");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ridership-analyzer <COMMAND> --help");
}
