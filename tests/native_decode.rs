//! Integration tests against the system libzbar
//!
//! Run with `cargo test --features native`.

#![cfg(feature = "native")]

use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;
use qrcode::{Color, QrCode};
use zedbar_decode::{decode, decode_with, DecodeOptions, Error, SymbolType};

const MODULE: u32 = 4;
const QUIET: u32 = 4;

/// Render `data` as a QR code, `MODULE` pixels per module with a quiet zone
fn qr_image(data: &[u8]) -> GrayImage {
    let code = QrCode::new(data).expect("encodable payload");
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET) * MODULE;

    GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / MODULE, y / MODULE);
        let inside =
            (QUIET..QUIET + modules).contains(&mx) && (QUIET..QUIET + modules).contains(&my);
        let dark =
            inside && colors[((my - QUIET) * modules + (mx - QUIET)) as usize] == Color::Dark;
        Luma([if dark { 0 } else { 255 }])
    })
}

#[test]
fn test_qr_round_trip() {
    let img = qr_image(b"Hello, simplified zbar!");
    let results = decode(&img).expect("decode succeeds");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].symbol_type, SymbolType::QrCode);
    assert_eq!(results[0].text(), Some("Hello, simplified zbar!"));

    // The symbol sits inside the quiet zone
    let rect = results[0].rect;
    let side = img.width() as i32;
    assert!(rect.left >= 0 && rect.top >= 0);
    assert!(rect.right() <= side && rect.bottom() <= side);
    assert!(rect.width > 0 && rect.height > 0);
}

#[test]
fn test_blank_image_has_no_symbols() {
    let img = GrayImage::from_pixel(64, 48, Luma([255]));
    assert_eq!(decode(&img), Ok(Vec::new()));
}

#[test]
fn test_representations_agree() {
    let img = qr_image(b"WIFI:S:Not a real network;T:SAE;P:password;H:false;;");
    let (width, height) = img.dimensions();
    let raw = img.as_raw().clone();
    let picture = DynamicImage::ImageLuma8(img.clone());
    let rgb = DynamicImage::ImageRgb8(picture.to_rgb8());
    let array = Array2::from_shape_vec((height as usize, width as usize), raw.clone()).unwrap();

    let expected = decode(&img).unwrap();
    assert_eq!(expected.len(), 1);
    assert_eq!(decode((raw.as_slice(), width, height)).unwrap(), expected);
    assert_eq!(decode(&picture).unwrap(), expected);
    assert_eq!(decode(&rgb).unwrap(), expected);
    assert_eq!(decode(&array).unwrap(), expected);
}

#[test]
fn test_filter_excludes_other_types() {
    let img = qr_image(b"filtered");
    let only_codes = DecodeOptions::new()
        .symbol(SymbolType::Code128)
        .symbol(SymbolType::Ean13);
    assert_eq!(decode_with(&img, &only_codes), Ok(Vec::new()));

    let only_qr = DecodeOptions::new().symbol(SymbolType::QrCode);
    assert_eq!(decode_with(&img, &only_qr).unwrap().len(), 1);
}

#[test]
fn test_scan_locations_lie_inside_rect() {
    let img = qr_image(b"locations");
    let results = decode_with(&img, &DecodeOptions::new().scan_locations(true)).unwrap();

    let symbol = &results[0];
    let points = symbol.locations.as_ref().expect("locations requested");
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| symbol.rect.contains(*p)));
}

#[test]
fn test_wide_buffer_is_rejected() {
    let pixels = vec![0u8; 32 * 32 * 2];
    let err = decode((pixels.as_slice(), 32, 32)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert_eq!(err.to_string(), "unsupported bits-per-pixel [16]");
}
