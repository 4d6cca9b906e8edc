//! Command-line barcode scanner
//!
//! Build with: `cargo build --features cli --bin zedbar-decode`

use clap::Parser;
use std::io::Write;
use std::process;
use zedbar_decode::{decode_with, DecodeOptions, Decoded, SymbolType};

/// Scan and decode bar codes from one or more image files
#[derive(Parser)]
#[command(name = "zedbar-decode")]
#[command(version)]
#[command(about = "Scan and decode bar codes from one or more image files", long_about = None)]
struct Args {
    /// Minimal output, only print decoded symbol data
    #[arg(short, long)]
    quiet: bool,

    /// Output decoded symbol data without the symbology prefix
    #[arg(long)]
    raw: bool,

    /// Only decode this symbology (repeatable), e.g. `qrcode`, `code128`
    #[arg(short, long = "symbol", value_name = "TYPE")]
    symbols: Vec<SymbolType>,

    /// Print bounding box and scan points after each symbol
    #[arg(long)]
    locations: bool,

    /// Image files to scan
    #[arg(required = true)]
    files: Vec<String>,
}

fn print_symbol(symbol: &Decoded, args: &Args) {
    let mut out = std::io::stdout().lock();
    if !args.raw {
        write!(out, "{}:", symbol.symbol_type).ok();
    }
    out.write_all(&symbol.data).ok();
    if args.locations {
        let r = symbol.rect;
        write!(out, " [{},{} {}x{}]", r.left, r.top, r.width, r.height).ok();
        for p in symbol.locations.iter().flatten() {
            write!(out, " ({},{})", p.x, p.y).ok();
        }
    }
    writeln!(out).ok();
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = DecodeOptions::new()
        .symbols(args.symbols.iter().copied())
        .scan_locations(args.locations);

    let mut total_symbols = 0;

    for filename in &args.files {
        let img = match ::image::open(filename) {
            Ok(img) => img,
            Err(e) => {
                if !args.quiet {
                    eprintln!("Failed to load image '{}': {}", filename, e);
                }
                process::exit(1);
            }
        };

        let symbols = match decode_with(&img, &options) {
            Ok(symbols) => symbols,
            Err(e) => {
                if !args.quiet {
                    eprintln!("Failed to decode '{}': {}", filename, e);
                }
                process::exit(1);
            }
        };

        total_symbols += symbols.len();
        for symbol in &symbols {
            print_symbol(symbol, &args);
        }
    }

    if total_symbols == 0 {
        if !args.quiet {
            eprintln!("No barcodes found");
        }
        process::exit(1);
    }
    if !args.quiet {
        eprintln!(
            "scanned {} barcode symbols from {} image(s)",
            total_symbols,
            args.files.len()
        );
    }
}
