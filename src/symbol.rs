//! Symbol types and iteration over scan results
//!
//! After a scan the engine keeps its results in a singly linked list owned by
//! the image. [`SymbolIter`] walks that list lazily and hands out borrowed
//! [`Symbol`] views; none of them can outlive the [`Image`](crate::Image)
//! they came from.

use std::fmt::Display;
use std::str::FromStr;

use crate::decoded::{Decoded, Orientation, Point, Rect};
use crate::engine::Engine;
use crate::{Error, Result};

/// Barcode symbologies known to the engine (`zbar_symbol_type_t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum SymbolType {
    #[default]
    None = 0,
    Partial = 1,
    Ean2 = 2,
    Ean5 = 5,
    Ean8 = 8,
    Upce = 9,
    Isbn10 = 10,
    Upca = 12,
    Ean13 = 13,
    Isbn13 = 14,
    Composite = 15,
    I25 = 25,
    Databar = 34,
    DatabarExp = 35,
    Codabar = 38,
    Code39 = 39,
    Pdf417 = 57,
    QrCode = 64,
    SqCode = 80,
    Code93 = 93,
    Code128 = 128,
}

impl SymbolType {
    /// Every type the engine knows, in ascending code order
    pub const ALL: [Self; 21] = [
        SymbolType::None,
        SymbolType::Partial,
        SymbolType::Ean2,
        SymbolType::Ean5,
        SymbolType::Ean8,
        SymbolType::Upce,
        SymbolType::Isbn10,
        SymbolType::Upca,
        SymbolType::Ean13,
        SymbolType::Isbn13,
        SymbolType::Composite,
        SymbolType::I25,
        SymbolType::Databar,
        SymbolType::DatabarExp,
        SymbolType::Codabar,
        SymbolType::Code39,
        SymbolType::Pdf417,
        SymbolType::QrCode,
        SymbolType::SqCode,
        SymbolType::Code93,
        SymbolType::Code128,
    ];

    /// Engine symbology name, as printed by `zbarimg`
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Partial => "Partial",
            Self::Ean2 => "EAN-2",
            Self::Ean5 => "EAN-5",
            Self::Ean8 => "EAN-8",
            Self::Upce => "UPC-E",
            Self::Isbn10 => "ISBN-10",
            Self::Upca => "UPC-A",
            Self::Ean13 => "EAN-13",
            Self::Isbn13 => "ISBN-13",
            Self::Composite => "COMPOSITE",
            Self::I25 => "I2/5",
            Self::Databar => "DataBar",
            Self::DatabarExp => "DataBar-Exp",
            Self::Codabar => "Codabar",
            Self::Code39 => "CODE-39",
            Self::Pdf417 => "PDF417",
            Self::QrCode => "QR-Code",
            Self::SqCode => "SQ-Code",
            Self::Code93 => "CODE-93",
            Self::Code128 => "CODE-128",
        }
    }
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<SymbolType> for i32 {
    fn from(value: SymbolType) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for SymbolType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| *t as i32 == value)
            .ok_or(Error::UnknownSymbolType(value))
    }
}

/// Case-insensitive; punctuation is ignored, so `"qrcode"`, `"QR-Code"` and
/// `"QrCode"` all parse.
impl FromStr for SymbolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        fn squash(s: &str) -> String {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_uppercase())
                .collect()
        }

        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|t| squash(t.name()) == wanted || squash(&format!("{t:?}")) == wanted)
            .ok_or_else(|| Error::ParseSymbolType(s.to_string()))
    }
}

/// A decoded symbol still owned by the engine
pub struct Symbol<'i, E: Engine> {
    engine: &'i E,
    handle: E::Symbol,
}

impl<'i, E: Engine> Symbol<'i, E> {
    pub fn symbol_type(&self) -> Result<SymbolType> {
        SymbolType::try_from(unsafe { self.engine.symbol_type(self.handle) })
    }

    /// Payload bytes, copied out of the engine
    pub fn data(&self) -> Vec<u8> {
        unsafe { self.engine.symbol_data(self.handle) }
    }

    pub fn quality(&self) -> i32 {
        unsafe { self.engine.symbol_quality(self.handle) }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from(unsafe { self.engine.symbol_orientation(self.handle) })
    }

    /// Scan points in the order the engine reports them
    pub fn locations(&self) -> Vec<Point> {
        let count = unsafe { self.engine.location_count(self.handle) };
        (0..count)
            .map(|index| unsafe {
                Point {
                    x: self.engine.location_x(self.handle, index),
                    y: self.engine.location_y(self.handle, index),
                }
            })
            .collect()
    }

    /// Copy everything the caller needs out of the engine.
    ///
    /// Fails with [`Error::EmptyLocationSet`] when the engine reported no
    /// scan points, since there is no rectangle to bound.
    pub fn extract(&self, keep_locations: bool) -> Result<Decoded> {
        let symbol_type = self.symbol_type()?;
        let locations = self.locations();
        let rect = Rect::bounding(&locations).ok_or(Error::EmptyLocationSet(symbol_type))?;

        Ok(Decoded {
            data: self.data(),
            symbol_type,
            rect,
            quality: self.quality(),
            orientation: self.orientation(),
            locations: keep_locations.then_some(locations),
        })
    }
}

/// Iterator over the symbols found in a scanned image
///
/// Follows the engine's "first, then next" protocol once; the order is
/// whatever the engine produced.
pub struct SymbolIter<'i, E: Engine> {
    engine: &'i E,
    cursor: Cursor<E>,
}

enum Cursor<E: Engine> {
    /// Nothing fetched yet
    Start(E::Image),
    At(E::Symbol),
    Done,
}

impl<'i, E: Engine> SymbolIter<'i, E> {
    /// # Safety
    ///
    /// `image` must be a live, scanned image of `engine` that outlives `'i`.
    pub(crate) unsafe fn new(engine: &'i E, image: E::Image) -> Self {
        Self {
            engine,
            cursor: Cursor::Start(image),
        }
    }
}

impl<'i, E: Engine> Iterator for SymbolIter<'i, E> {
    type Item = Symbol<'i, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.cursor {
            Cursor::Start(image) => unsafe { self.engine.first_symbol(image) },
            Cursor::At(symbol) => unsafe { self.engine.next_symbol(symbol) },
            Cursor::Done => None,
        };
        self.cursor = match current {
            Some(symbol) => Cursor::At(symbol),
            None => Cursor::Done,
        };
        current.map(|handle| Symbol {
            engine: self.engine,
            handle,
        })
    }
}

impl<E: Engine> std::iter::FusedIterator for SymbolIter<'_, E> {}
