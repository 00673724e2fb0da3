use anyhow::Result;
use clap::{Parser, Subcommand};

use wasla_core::{SegmentCatalog, sample_posts};

mod commands;

#[derive(Parser)]
#[command(name = "wasla")]
#[command(about = "Wasla - audience reaction analysis for Iraqi remittance marketing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the built-in audience segments
    Segments {
        #[command(subcommand)]
        action: SegmentsAction,
    },
    /// Print the built-in sample posts
    Samples,
    /// Run an analysis against the selected segments
    Analyze(commands::analyze::AnalyzeArgs),
}

#[derive(Subcommand)]
enum SegmentsAction {
    /// List segment names with age ranges
    List,
    /// Show one segment in detail
    Show { name: String },
    /// Print the comparison table for the given segments (default: all)
    Compare { names: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Segments { action } => {
            let catalog = SegmentCatalog::builtin();
            match action {
                SegmentsAction::List => commands::segments::list(&catalog),
                SegmentsAction::Show { name } => commands::segments::show(&catalog, &name)?,
                SegmentsAction::Compare { names } => commands::segments::compare(&catalog, &names)?,
            }
        }
        Commands::Samples => {
            for (index, post) in sample_posts().iter().enumerate() {
                println!("{}. {post}", index + 1);
            }
        }
        Commands::Analyze(args) => commands::analyze::run(args).await?,
    }

    Ok(())
}
