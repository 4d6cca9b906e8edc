//! Image scanner for finding barcodes in 2D images

use std::collections::BTreeSet;

use crate::engine::{ConfigOption, Engine};
use crate::error::Resource;
use crate::image::Image;
use crate::{DecodeOptions, Error, Result, SymbolType};

/// An engine scanner, destroyed when dropped
///
/// Not `Clone`: exactly one owner releases the handle.
pub struct Scanner<'e, E: Engine> {
    engine: &'e E,
    handle: E::Scanner,
}

impl<'e, E: Engine> Scanner<'e, E> {
    /// Fails with [`Error::ResourceCreation`] when the engine returns no
    /// scanner; nothing needs releasing in that case.
    pub fn new(engine: &'e E) -> Result<Self> {
        let handle = engine
            .create_scanner()
            .ok_or(Error::ResourceCreation(Resource::Decoder))?;
        log::debug!("created scanner");
        Ok(Scanner { engine, handle })
    }

    /// Set one configuration option; `SymbolType::None` applies it to every
    /// symbology.
    ///
    /// A rejected option is logged and otherwise ignored.
    pub fn set_config(&mut self, symbol: SymbolType, option: ConfigOption, value: i32) {
        log::trace!("set_config({symbol}, {option:?}, {value})");
        let status = unsafe { self.engine.set_config(self.handle, symbol, option, value) };
        if status != 0 {
            log::warn!("scanner rejected {option:?}={value} for {symbol} (status {status})");
        }
    }

    /// Apply the scanner-level parts of `options`.
    pub fn configure(&mut self, options: &DecodeOptions) {
        if let Some((x, y)) = options.scan_density {
            self.set_config(SymbolType::None, ConfigOption::XDensity, x);
            self.set_config(SymbolType::None, ConfigOption::YDensity, y);
        }
        if let Some(wanted) = options.wanted_symbols() {
            self.restrict_to(wanted);
        }
    }

    /// Disable every symbology outside `wanted`, then enable each one in it.
    ///
    /// An empty set leaves the engine defaults untouched.
    pub fn restrict_to(&mut self, wanted: &BTreeSet<SymbolType>) {
        if wanted.is_empty() {
            return;
        }
        for symbol in SymbolType::ALL.into_iter().filter(|t| !wanted.contains(t)) {
            self.set_config(symbol, ConfigOption::Enable, 0);
        }
        for &symbol in wanted {
            self.set_config(symbol, ConfigOption::Enable, 1);
        }
    }

    /// Scan an image for barcodes
    ///
    /// Returns the number of symbols found in the image.
    pub fn scan(&mut self, image: &mut Image<'_, '_, E>) -> Result<usize> {
        let status = unsafe { self.engine.scan(self.handle, image.handle()) };
        if status < 0 {
            return Err(Error::UnsupportedImageFormat(status));
        }
        log::debug!("scan found {status} symbol(s)");
        Ok(status as usize)
    }
}

impl<E: Engine> Drop for Scanner<'_, E> {
    fn drop(&mut self) {
        unsafe { self.engine.destroy_scanner(self.handle) };
        log::debug!("destroyed scanner");
    }
}
