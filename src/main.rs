use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wikivec::{
    ensure_dataset, read_sample, read_sample_fast, AcquireOptions, DEFAULT_FAST_ROWS,
    DEFAULT_FILE_NAME, DEFAULT_REFERENCE_ROWS,
};

#[derive(Parser)]
#[command(name = "wikivec", version, about = "Fetch and sample the Wikipedia-articles embedding dataset")]
struct Cli {
    /// Directory holding the extracted CSV
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Directory holding the downloaded archive until extraction
    #[arg(long, default_value = ".")]
    download_dir: PathBuf,

    /// Base file name without extension
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and extract the dataset if it is not already on disk
    Fetch,
    /// Ensure the dataset is on disk, then load and summarize a row sample
    Sample {
        /// Number of rows to load (defaults: 300 fast, 10000 reference)
        #[arg(long)]
        rows: Option<usize>,
        /// Use the literal-only reference parser instead of the fast path
        #[arg(long)]
        reference: bool,
        /// Print the loaded rows as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let opts = AcquireOptions {
        data_dir: cli.data_dir.clone(),
        download_dir: cli.download_dir.clone(),
        file_name: cli.name.clone(),
    };

    match cli.command {
        Commands::Fetch => {
            let paths = ensure_dataset(&opts)?;
            println!("dataset ready: {}", paths.csv_path.display());
        }
        Commands::Sample { rows, reference, json } => {
            ensure_dataset(&opts)?;
            let table = if reference {
                read_sample(&cli.data_dir, &cli.name, rows.unwrap_or(DEFAULT_REFERENCE_ROWS))?
            } else {
                read_sample_fast(&cli.data_dir, &cli.name, rows.unwrap_or(DEFAULT_FAST_ROWS))?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&table.articles)?);
                return Ok(());
            }

            println!("rows loaded:      {}", table.len());
            match table.embedding_dim() {
                Some(dim) => println!("embedding dim:    {dim}"),
                None => println!("embedding dim:    (empty sample)"),
            }
            println!("metadata columns: {}", table.metadata_columns.join(", "));
            if let Some(first) = table.articles.first() {
                println!("first vector_id:  {}", first.vector_id);
            }
        }
    }

    Ok(())
}
