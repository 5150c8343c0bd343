use std::env;
use std::path::PathBuf;

use clap::Parser;
use wavname_rs::{renamer, scan};

#[derive(Parser, Debug)]
#[command(
    about = "Rename each .dataset folder's sample to match the folder name",
    version
)]
struct Args {
    /// Directory to scan for .dataset folders (defaults to the current directory)
    root: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let root = match args.root {
        Some(path) => path,
        None => env::current_dir()?,
    };

    // One outcome line per dataset directory, printed as the pass goes.
    for dir in scan::dataset_dirs(&root)? {
        let outcome = renamer::rename_dataset(&dir)?;
        println!("{outcome}");
    }

    Ok(())
}
