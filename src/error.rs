//! Error types and handling

use std::fmt;

use crate::SymbolType;

/// Native resource that failed to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The engine's image scanner (`zbar_image_scanner_create`)
    Decoder,
    /// The engine's image object (`zbar_image_create`)
    Image,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decoder => write!(f, "decoder"),
            Self::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pixel buffer does not hold exactly one byte per pixel.
    #[error("unsupported bits-per-pixel [{}]", format_bpp(.bits, .pixels))]
    UnsupportedFormat { bits: u64, pixels: u64 },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("unsupported pixel array shape {0:?}")]
    UnsupportedShape(Vec<usize>),

    #[error("could not create {0}")]
    ResourceCreation(Resource),

    /// The engine rejected the image during the scan.
    #[error("unsupported image format (scan status {0})")]
    UnsupportedImageFormat(i32),

    #[error("{0} symbol reported no scan locations")]
    EmptyLocationSet(SymbolType),

    #[error("unknown symbol type code: {0}")]
    UnknownSymbolType(i32),

    #[error("unknown symbol type name: {0:?}")]
    ParseSymbolType(String),
}

impl Error {
    /// Bits per pixel reported by an [`Error::UnsupportedFormat`], if any
    pub fn bits_per_pixel(&self) -> Option<f64> {
        match self {
            Self::UnsupportedFormat { bits, pixels } => Some(*bits as f64 / *pixels as f64),
            _ => None,
        }
    }
}

/// Renders `bits / pixels` exactly when it divides, as a decimal otherwise.
fn format_bpp(bits: &u64, pixels: &u64) -> String {
    let (bits, pixels) = (*bits, *pixels);
    if pixels != 0 && bits % pixels == 0 {
        (bits / pixels).to_string()
    } else {
        (bits as f64 / pixels as f64).to_string()
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpp_message_is_exact() {
        let err = Error::UnsupportedFormat {
            bits: 16 * 12,
            pixels: 12,
        };
        assert_eq!(err.to_string(), "unsupported bits-per-pixel [16]");
        assert_eq!(err.bits_per_pixel(), Some(16.0));

        let err = Error::UnsupportedFormat { bits: 50, pixels: 4 };
        assert_eq!(err.to_string(), "unsupported bits-per-pixel [12.5]");
    }

    #[test]
    fn test_resource_messages() {
        assert_eq!(
            Error::ResourceCreation(Resource::Image).to_string(),
            "could not create image"
        );
        assert_eq!(
            Error::ResourceCreation(Resource::Decoder).to_string(),
            "could not create decoder"
        );
    }
}
