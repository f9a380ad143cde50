use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::convert::{self, ConvertOptions, Report};

/// Convert landing page images: favicon sizes and WebP gallery copies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site root holding favicon.jpg and the gallery folder
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Gallery folder (default: <project-dir>/1)
    #[arg(long)]
    gallery_dir: Option<PathBuf>,

    /// Where WebP copies go (default: the gallery folder)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl Cli {
    fn options(self) -> ConvertOptions {
        let mut opts = ConvertOptions::new(self.project_dir);
        if let Some(dir) = self.gallery_dir {
            opts.output_dir = dir.clone();
            opts.gallery_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            opts.output_dir = dir;
        }
        opts
    }
}

pub fn run() -> Result<()> {
    let opts = Cli::parse().options();
    let report = convert::run(&opts)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    let rule = "=".repeat(50);
    println!("{rule}\nRESULTS\n{rule}");
    println!("\ncreated: {}", report.success.len());
    for f in &report.success {
        println!("   - {f}");
    }
    if !report.failed.is_empty() {
        println!("\nfailed: {}", report.failed.len());
        for f in &report.failed {
            println!("   - {f}");
        }
    }
    println!("\nnext steps:");
    println!("   1. link the favicons from <head>");
    println!("   2. point gallery <img> tags at the .webp files");
    println!("   3. remove the original .jpg/.png files if no longer needed");
}
