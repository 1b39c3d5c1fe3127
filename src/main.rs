//! quirktable - Entry Point
//!
//! Fetches the mech and omnipod data, builds one quirk table per chassis,
//! and writes the HTML files. A chassis that fails to build is logged and
//! skipped; the batch carries on.

use quirktable::api::records::{RawMech, RawOmnipod};
use quirktable::api::{battlemech_families, SmurfyClient, DEFAULT_BASE_URL};
use quirktable::core::error::Result;
use quirktable::mech::{Battlemech, Omnimech};
use quirktable::render::write_tables;

use clap::Parser;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::runtime::Runtime;

/// Generate MWO quirk comparison tables
#[derive(Parser, Debug)]
#[command(name = "quirktable")]
#[command(about = "Fetch MWO mech data and write per-chassis quirk tables")]
struct Args {
    /// Directory the HTML tables are written to
    #[arg(long, default_value = "tables")]
    out: PathBuf,

    /// Base URL of the data API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api: String,

    /// Skip omnimech tables
    #[arg(long)]
    skip_omni: bool,

    /// Skip battlemech tables
    #[arg(long)]
    skip_battle: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "quirktable=debug"
    } else {
        "quirktable=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rt = Runtime::new()?;
    let client = SmurfyClient::new(args.api.clone());

    let mut written = 0;

    if !args.skip_omni {
        tracing::info!("fetching omnipods");
        let omnipods = rt.block_on(client.get_omnipods())?;
        written += build_and_write_omnimechs(&args.out, omnipods)?;
    }

    if !args.skip_battle {
        tracing::info!("fetching mech list");
        let mechs = rt.block_on(client.get_mechs())?;
        written += build_and_write_battlemechs(&args.out, mechs)?;
    }

    tracing::info!(count = written, "completed successfully");
    println!("Completed successfully: wrote {} html files", written);
    Ok(())
}

fn build_and_write_omnimechs(
    out: &PathBuf,
    omnipods: HashMap<String, HashMap<String, RawOmnipod>>,
) -> Result<usize> {
    let chassis_list: Vec<_> = omnipods.into_iter().collect();
    let mut mechs: Vec<Omnimech> = chassis_list
        .par_iter()
        .filter_map(|(chassis, pods)| match Omnimech::new(chassis, pods) {
            Ok(mech) => Some(mech),
            Err(e) => {
                tracing::warn!(chassis = chassis.as_str(), error = %e, "skipping omnimech");
                None
            }
        })
        .collect();
    mechs.sort();
    write_tables(out, &mechs)
}

fn build_and_write_battlemechs(
    out: &PathBuf,
    mechs: HashMap<String, RawMech>,
) -> Result<usize> {
    let families: Vec<_> = battlemech_families(mechs.into_values()).into_iter().collect();
    let mut tables: Vec<Battlemech> = families
        .par_iter()
        .filter_map(|(family, variants)| match Battlemech::new(family, variants) {
            Ok(mech) => Some(mech),
            Err(e) => {
                tracing::warn!(family = family.as_str(), error = %e, "skipping battlemech");
                None
            }
        })
        .collect();
    tables.sort();
    write_tables(out, &tables)
}
