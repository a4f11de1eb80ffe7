use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use punyglyph::permutate::Domain;

mod report;

/// Generate visually deceptive homoglyph variations of a domain and
/// render them as links. For educational purposes only.
#[derive(Parser, Debug)]
#[command(name = "punyglyph", version, long_about = None)]
struct Args {
    /// Base domain (e.g. "example"), or a full domain (e.g. "example.co.uk")
    /// when no TLD is given
    domain: String,

    /// Top-level domain (e.g. "com")
    tld: Option<String>,

    /// Output HTML file name
    #[arg(short, long, default_value = "links.html")]
    output: PathBuf,

    /// Maximum character substitutions
    #[arg(short, long, default_value_t = 1)]
    max_substitutions: usize,

    /// Print UTF-8 variations to the terminal
    #[arg(short, long)]
    print: bool,

    /// Print variations as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Do not write the HTML report
    #[arg(long)]
    no_report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let domain = domain(&args)?;

    info!(label = %domain.label, tld = %domain.tld, "generating variations");

    let generation = domain.homoglyph(args.max_substitutions);
    let variants = &generation.variants;

    if args.json {
        println!("{}", serde_json::to_string_pretty(variants)?);
    } else {
        println!(
            "\n{} {} deceptive link variations",
            "Generated".bold(),
            variants.len().to_string().green()
        );

        if args.print {
            println!("\n{}", "UTF-8 Variations:".bold());
            for (i, variant) in variants.iter().enumerate() {
                println!("{}. {}", i + 1, variant.display);
            }
            println!();
        }
    }

    if variants.is_empty() {
        if !args.json {
            println!(
                "{}",
                "No variations possible - check input domain and substitution settings".yellow()
            );
        }
        return Ok(());
    }

    if !args.no_report {
        report::write(&args.output, variants)?;

        if !args.json {
            println!("Output saved to {}", args.output.display().to_string().green());
        }
    }

    Ok(())
}

/// Build the `Domain` to permute. Input is lower-cased; without an
/// explicit TLD the positional argument is parsed as a full domain.
fn domain(args: &Args) -> Result<Domain> {
    let label = args.domain.to_lowercase();

    match &args.tld {
        Some(tld) => Domain::new(&label, &tld.to_lowercase())
            .with_context(|| format!("invalid domain {:?} with TLD {:?}", args.domain, tld)),
        None => {
            Domain::from_fqdn(&label).with_context(|| format!("invalid domain {:?}", args.domain))
        }
    }
}
