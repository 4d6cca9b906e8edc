//! Per-call decode options
//!
//! # Examples
//!
//! ```
//! use zedbar_decode::{DecodeOptions, SymbolType};
//!
//! let options = DecodeOptions::new()
//!     .symbol(SymbolType::QrCode)
//!     .symbol(SymbolType::Code128)
//!     .scan_locations(true);
//! assert!(options.is_restricted());
//! ```

use std::collections::BTreeSet;

use crate::SymbolType;

/// What to look for and what to report
///
/// The default enables every symbology the engine supports, issues no
/// configuration calls and reports only bounding rectangles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Symbologies to enable; `None` leaves the engine's own defaults alone
    pub(crate) symbols: Option<BTreeSet<SymbolType>>,

    /// Attach raw scan points to each result
    pub(crate) scan_locations: bool,

    /// Engine-wide scan line spacing (x, y)
    pub(crate) scan_density: Option<(i32, i32)>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only decode the given symbologies
    ///
    /// An empty set means no restriction.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = SymbolType>) -> Self {
        let wanted: BTreeSet<_> = symbols.into_iter().collect();
        self.symbols = (!wanted.is_empty()).then_some(wanted);
        self
    }

    /// Add one symbology to the allow-list
    pub fn symbol(mut self, symbol: SymbolType) -> Self {
        self.symbols.get_or_insert_with(BTreeSet::new).insert(symbol);
        self
    }

    /// Keep each symbol's scan points in [`Decoded::locations`](crate::Decoded::locations)
    pub fn scan_locations(mut self, enabled: bool) -> Self {
        self.scan_locations = enabled;
        self
    }

    /// Set scan density for both axes
    ///
    /// A value of 1 scans every line; higher values are faster but may miss
    /// small symbols.
    pub fn scan_density(mut self, x: i32, y: i32) -> Self {
        assert!(x > 0, "x density must be > 0");
        assert!(y > 0, "y density must be > 0");
        self.scan_density = Some((x, y));
        self
    }

    /// Whether an allow-list will be applied
    pub fn is_restricted(&self) -> bool {
        self.symbols.is_some()
    }

    pub fn wanted_symbols(&self) -> Option<&BTreeSet<SymbolType>> {
        self.symbols.as_ref()
    }

    pub fn keeps_locations(&self) -> bool {
        self.scan_locations
    }
}
