extern crate anyhow;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate typewidth;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use typewidth::{emit, Config, CrossValidator, WidthLookup};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typewidth", about = "East Asian Width tables from the UCD")]
struct Cli {
    /// Path to EastAsianWidth.txt (overrides TYPEWIDTH_UCD)
    #[arg(long, global = true)]
    ucd: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print width, category and range of code points given in hex
    Lookup {
        #[arg(required = true)]
        code_points: Vec<String>,
    },
    /// Write the table as Rust source
    Emit {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compare table categories against the platform's Unicode data
    Audit {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn output(path: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        )),
        None => Box::new(io::stdout()),
    })
}

fn parse_code_point(raw: &str) -> Result<u32> {
    let hex = raw.trim_start_matches("U+").trim_start_matches("0x");
    u32::from_str_radix(hex, 16).with_context(|| format!("{:?} is not a hex code point", raw))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.ucd {
        config.ucd_path = path;
    }
    let table = config
        .load_table()
        .with_context(|| format!("loading {}", config.ucd_path.display()))?;
    info!("{} ranges loaded", table.len());

    let lookup = WidthLookup::new(table);
    match cli.command {
        Command::Lookup { code_points } => {
            for raw in &code_points {
                let cp = parse_code_point(raw)?;
                let category = lookup.general_category_of(cp)?;
                match lookup.range_of(cp) {
                    Some(e) => println!(
                        "U+{:04X}\t{}\t{}\t{:04X}..{:04X}\t{}..{}",
                        cp, lookup.width_of(cp), category, e.start, e.end, e.start_name, e.end_name
                    ),
                    None => println!("U+{:04X}\t{}\t{}\tunlisted", cp, lookup.width_of(cp), category),
                }
            }
        }
        Command::Emit { out } => {
            let mut w = output(&out)?;
            emit::write_to(lookup.table(), &mut w)?;
            w.flush()?;
        }
        Command::Audit { out, threads } => {
            let report = CrossValidator::new(&lookup)
                .threads(threads.or(config.threads))
                .run()?;
            for ((expected, actual), n) in report.summary() {
                info!("{} -> {}: {}", expected, actual, n);
            }
            for fault in &report.faults {
                warn!("U+{:04X}: {}", fault.code_point, fault.reason);
            }
            let mut w = output(&out)?;
            report.write_csv(&mut w)?;
            w.flush()?;
        }
    }
    Ok(())
}
