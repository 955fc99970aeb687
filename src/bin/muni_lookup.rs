//! Look up NJ municipality names by code
//!
//! Usage:
//!   muni_lookup 0714 1111
//!   muni_lookup --county 07 --format csv
//!   muni_lookup --all --format json

use anyhow::{bail, Result};
use clap::Parser;
use nj_muni_codes::{
    counties, muni_names,
    output::{resolve, write_rows, OutputFormat, Row},
};

#[derive(Parser, Debug)]
#[command(name = "muni_lookup")]
#[command(about = "Look up New Jersey municipality names by 4-digit code")]
struct Args {
    /// Municipality codes to look up
    codes: Vec<String>,

    /// List every municipality in a county (two-digit county code)
    #[arg(long, conflicts_with_all = ["codes", "all"])]
    county: Option<String>,

    /// List the whole directory
    #[arg(long, conflicts_with = "codes")]
    all: bool,

    /// Include the county name in the output
    #[arg(long)]
    with_county: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let rows: Vec<Row> = if let Some(county) = &args.county {
        counties::county_name(county)?;
        muni_names::in_county(county)
            .into_iter()
            .map(|r| Row::new(r, args.with_county))
            .collect()
    } else if args.all {
        muni_names::records()
            .map(|r| Row::new(r, args.with_county))
            .collect()
    } else if args.codes.is_empty() {
        bail!("no municipality codes given (use --all or --county to list)");
    } else {
        let (rows, misses) = resolve(args.codes.as_slice(), args.with_county);
        for e in &misses {
            eprintln!("error: {}", e);
        }
        write_rows(std::io::stdout().lock(), &rows, args.format)?;
        if !misses.is_empty() {
            bail!("{} of {} codes not found", misses.len(), args.codes.len());
        }
        return Ok(());
    };

    write_rows(std::io::stdout().lock(), &rows, args.format)?;

    Ok(())
}
