//! Report CLI
//!
//! Season snapshot JSON → weekly metric tables JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ffr_cli")]
#[command(about = "Compute fantasy league metric tables from season snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the report from a season snapshot file
    Report {
        /// Input season snapshot JSON path
        #[arg(long)]
        r#in: PathBuf,

        /// Output report JSON path
        #[arg(long)]
        out: PathBuf,

        /// Week to annotate with season averages (default: latest)
        #[arg(long)]
        week: Option<u32>,

        /// Pretty-print the output JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { r#in, out, week, pretty } => {
            println!("Building season report...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());

            let meta = ffr_cli::build_report_file(&r#in, &out, week, pretty)?;

            println!("\nReport built successfully!");
            println!("   Engine:         {}", meta.engine_version);
            println!("   Weeks computed: {}", meta.weeks_computed);
            println!("   Annotated week: {}", meta.annotated_week);
            println!("   Created:        {}", meta.generated_at);
        }
    }

    Ok(())
}
