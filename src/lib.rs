//! Barcode and QR code decoding for in-memory images
//!
//! This crate hands images to a barcode scanning engine (normally the system
//! libzbar) and returns plain Rust values: payload bytes, symbology and
//! bounding box. Engine handles are created and destroyed inside each call,
//! so callers never manage native memory.
//!
//! ```no_run
//! # #[cfg(feature = "native")]
//! # fn main() -> zedbar_decode::Result<()> {
//! use zedbar_decode::{decode_with, DecodeOptions, SymbolType};
//!
//! let picture = image::open("ticket.png").expect("readable image");
//! let options = DecodeOptions::new().symbol(SymbolType::QrCode);
//! for symbol in decode_with(&picture, &options)? {
//!     println!("{}: {:?} at {:?}", symbol.symbol_type, symbol.text(), symbol.rect);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "native"))]
//! # fn main() {}
//! ```
//!
//! Decoding is synchronous and holds no state between calls. With the
//! `native` engine, concurrent calls from several threads are only safe if
//! the linked libzbar creates and destroys independent handles reentrantly.

pub mod config;
pub mod decoded;
pub mod engine;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod pixels;
pub mod scanner;
pub mod symbol;

#[cfg(feature = "native")]
mod ffi;
#[cfg(feature = "native")]
pub mod native;

#[cfg(test)]
mod testing;

// Re-export main types
pub use config::DecodeOptions;
pub use decoded::{Decoded, Orientation, Point, Rect};
pub use engine::{ConfigOption, Engine, Fourcc};
pub use error::{Error, Resource, Result};
pub use crate::image::Image;
pub use pipeline::Decoder;
pub use pixels::{CanonicalImage, ImageSource, PixelArray, Sample};
pub use scanner::Scanner;
pub use symbol::{Symbol, SymbolIter, SymbolType};

#[cfg(feature = "native")]
pub use native::Zbar;

/// Decode every symbol in `source` with the system libzbar.
#[cfg(feature = "native")]
pub fn decode<'a>(source: impl Into<ImageSource<'a>>) -> Result<Vec<Decoded>> {
    decode_with(source, &DecodeOptions::default())
}

/// [`decode`] with explicit options
#[cfg(feature = "native")]
pub fn decode_with<'a>(
    source: impl Into<ImageSource<'a>>,
    options: &DecodeOptions,
) -> Result<Vec<Decoded>> {
    Decoder::new(Zbar).decode(source, options)
}
