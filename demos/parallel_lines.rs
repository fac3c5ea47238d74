use clap::Parser;
use lazy_iters::{all_lines, elapsed_since, parallel_lines};
use std::{error::Error, path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

/// Print the lines of every file in a directory, first lines first.
#[derive(Parser, Debug)]
#[command(name = "parallel_lines")]
struct Cli {
    /// Directory whose files should be read
    dir: PathBuf,
    /// Only print lines containing this text
    #[arg(long)]
    filter: Option<String>,
    /// Read each file completely before the next one
    #[arg(long)]
    sequential: bool,
    /// Minimum delay between printed lines, in milliseconds
    #[arg(long, default_value_t = 0)]
    pace_ms: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let pace = Duration::from_millis(cli.pace_ms);

    let lines: Box<dyn Iterator<Item = (String, String)>> = if cli.sequential {
        let filter = cli.filter.clone();
        Box::new(all_lines(&cli.dir)?.filter(move |(_, line)| {
            filter.as_deref().is_none_or(|needle| line.contains(needle))
        }))
    } else {
        let lines = parallel_lines(&cli.dir)?;
        match cli.filter {
            Some(needle) => Box::new(lines.with_filter(needle)),
            None => Box::new(lines),
        }
    };

    for (_, (file_name, line)) in elapsed_since(lines, pace) {
        println!("{file_name}: {line}");
    }

    Ok(())
}
