use clap::Parser;
use shelftag::application::{convert_genres, fix_tags, preview_genres, ConvertOptions, FixOptions};
use shelftag::cli::{format_convert_report, format_fix_report, format_preview, format_rules};
use shelftag::cli::{Cli, Commands};
use shelftag::domain::TagRules;
use shelftag::error::ShelftagError;
use shelftag::infrastructure::{load_rules, JsonFileRepository, RulesFile};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins; otherwise the -v count picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("shelftag={}", default_level))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ShelftagError> {
    let rules = load_rules(cli.rules.as_deref())?;

    match cli.command {
        Commands::Convert {
            file,
            repair,
            dry_run,
            backup,
        } => {
            let repo = JsonFileRepository::new(file).with_backup(backup);
            let report = convert_genres(&repo, &rules, ConvertOptions { repair, dry_run })?;
            print!("{}", format_convert_report(&report));
            Ok(())
        }
        Commands::Fix {
            file,
            dry_run,
            backup,
        } => {
            let repo = JsonFileRepository::new(file).with_backup(backup);
            let report = fix_tags(&repo, &rules, FixOptions { dry_run })?;
            print!("{}", format_fix_report(&report));
            Ok(())
        }
        Commands::Preview { genres, repair } => {
            let lines = preview_genres(&genres, &rules, repair);
            print!("{}", format_preview(&lines));
            Ok(())
        }
        Commands::Rules { init } => {
            if let Some(path) = init {
                RulesFile::from_rules(&TagRules::default()).save(&path)?;
                println!("Wrote built-in rules to {}", path.display());
            } else {
                print!("{}", format_rules(&rules));
            }
            Ok(())
        }
    }
}
