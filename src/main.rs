use clap::Parser;
use tracing::{error, info};

use sp_padronizador::config::Config;
use sp_padronizador::logging;
use sp_padronizador::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "sp_padronizador")]
#[command(about = "Consolidates multi-year translation work spreadsheets into one CSV")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the pipeline configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    println!("🔄 Consolidating {} yearly workbooks...", config.years.len());

    match Pipeline::new(config).run() {
        Ok(summary) => {
            info!("Pipeline finished");
            println!("\n📊 Consolidation results:");
            for (year, rows) in &summary.rows_per_year {
                println!("   {}: {} rows", year, rows);
            }
            println!("   Total rows: {}", summary.total_rows);
            println!("   Output file: {}", summary.output_file.display());
            println!("✅ Consolidated dataset generated");
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            println!("❌ Pipeline failed: {}", e);
            Err(e.into())
        }
    }
}
