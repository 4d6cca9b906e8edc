//! Example showing the different ways to hand an image to the decoder
//!
//! ```text
//! cargo run --features native --example decode_options -- path/to/image.png
//! ```

use ndarray::Array2;
use zedbar_decode::{decode_with, DecodeOptions, SymbolType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: decode_options <image>")?;
    let picture = image::open(&path)?;

    println!("=== {path} ===\n");

    // 1. Decoded image of any color type; converted to grayscale on the way in
    println!("1. All symbologies, from the decoded image:");
    for symbol in decode_with(&picture, &DecodeOptions::new())? {
        println!("   {}: {:?} {:?}", symbol.symbol_type, symbol.text(), symbol.rect);
    }

    // 2. Raw grayscale bytes, restricted to a few symbologies
    println!("\n2. QR codes and EAN-13 only, from raw bytes:");
    let gray = picture.to_luma8();
    let options = DecodeOptions::new()
        .symbol(SymbolType::QrCode)
        .symbol(SymbolType::Ean13);
    let raw = (gray.as_raw().as_slice(), gray.width(), gray.height());
    for symbol in decode_with(raw, &options)? {
        println!("   {}: {:?}", symbol.symbol_type, symbol.text());
    }

    // 3. An ndarray of floats, with raw scan points kept
    println!("\n3. From an f32 array, with scan locations:");
    let array = Array2::from_shape_fn((gray.height() as usize, gray.width() as usize), |(y, x)| {
        f32::from(gray.get_pixel(x as u32, y as u32).0[0])
    });
    let options = DecodeOptions::new().scan_locations(true).scan_density(1, 1);
    for symbol in decode_with(&array, &options)? {
        let points = symbol.locations.as_deref().unwrap_or_default();
        println!(
            "   {} with {} scan points, quality {}, {:?}",
            symbol.symbol_type,
            points.len(),
            symbol.quality,
            symbol.orientation
        );
    }

    Ok(())
}
