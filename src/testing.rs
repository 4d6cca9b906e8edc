//! Recording in-memory [`Engine`] for unit tests

use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;

use crate::engine::{ConfigOption, Engine};
use crate::SymbolType;

/// A symbol the fake engine "finds" when scanning
#[derive(Debug, Clone)]
pub(crate) struct FakeSymbol {
    pub(crate) type_code: i32,
    pub(crate) data: Vec<u8>,
    pub(crate) points: Vec<(i32, i32)>,
    pub(crate) quality: i32,
    pub(crate) orientation: i32,
}

impl FakeSymbol {
    pub(crate) fn new(symbol_type: SymbolType, data: &[u8], points: &[(i32, i32)]) -> Self {
        FakeSymbol {
            type_code: symbol_type.into(),
            data: data.to_vec(),
            points: points.to_vec(),
            quality: 1,
            orientation: 0,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Calls {
    pub(crate) scanners_created: usize,
    pub(crate) scanners_destroyed: usize,
    pub(crate) images_created: usize,
    pub(crate) images_destroyed: usize,
    pub(crate) configs: Vec<(SymbolType, ConfigOption, i32)>,
    pub(crate) format: Option<u32>,
    pub(crate) size: Option<(u32, u32)>,
    /// (address, length) of the bound pixel buffer
    pub(crate) data: Option<(usize, usize)>,
    /// Copy of the pixels the last scan saw
    pub(crate) scanned_pixels: Vec<u8>,
    pub(crate) scans: usize,
    pub(crate) first_symbol_calls: usize,
    /// Handle releases in order, e.g. `["image", "scanner"]`
    pub(crate) releases: Vec<&'static str>,
}

/// Scans "find" `symbols` whose type is enabled by the configuration calls
/// made so far.
#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub(crate) symbols: Vec<FakeSymbol>,
    /// Overrides the scan return value
    pub(crate) scan_status: Option<i32>,
    /// Status returned by every configuration call
    pub(crate) config_status: i32,
    pub(crate) fail_scanner: bool,
    pub(crate) fail_image: bool,
    pub(crate) calls: RefCell<Calls>,
    pub(crate) found: RefCell<Vec<FakeSymbol>>,
}

impl FakeEngine {
    pub(crate) fn with_symbols(symbols: Vec<FakeSymbol>) -> Self {
        FakeEngine {
            symbols,
            ..FakeEngine::default()
        }
    }

    pub(crate) fn calls(&self) -> Ref<'_, Calls> {
        self.calls.borrow()
    }

    /// An image that has already been scanned with default settings
    pub(crate) fn scanned_image(&self) -> u32 {
        let scanner = self.create_scanner().unwrap_or_default();
        let image = self.create_image().unwrap_or_default();
        unsafe { self.scan(scanner, image) };
        image
    }

    fn enabled(&self) -> BTreeSet<SymbolType> {
        let mut enabled: BTreeSet<_> = SymbolType::ALL.into_iter().collect();
        for &(symbol, option, value) in &self.calls.borrow().configs {
            if option != ConfigOption::Enable {
                continue;
            }
            let targets = if symbol == SymbolType::None {
                SymbolType::ALL.to_vec()
            } else {
                vec![symbol]
            };
            for t in targets {
                if value != 0 {
                    enabled.insert(t);
                } else {
                    enabled.remove(&t);
                }
            }
        }
        enabled
    }

    fn found(&self, symbol: usize) -> FakeSymbol {
        self.found.borrow()[symbol].clone()
    }
}

impl Engine for FakeEngine {
    type Scanner = u32;
    type Image = u32;
    type Symbol = usize;

    fn create_scanner(&self) -> Option<u32> {
        if self.fail_scanner {
            return None;
        }
        let mut calls = self.calls.borrow_mut();
        calls.scanners_created += 1;
        Some(calls.scanners_created as u32)
    }

    unsafe fn destroy_scanner(&self, _scanner: u32) {
        let mut calls = self.calls.borrow_mut();
        calls.scanners_destroyed += 1;
        calls.releases.push("scanner");
    }

    unsafe fn set_config(
        &self,
        _scanner: u32,
        symbol: SymbolType,
        option: ConfigOption,
        value: i32,
    ) -> i32 {
        self.calls.borrow_mut().configs.push((symbol, option, value));
        self.config_status
    }

    fn create_image(&self) -> Option<u32> {
        if self.fail_image {
            return None;
        }
        let mut calls = self.calls.borrow_mut();
        calls.images_created += 1;
        Some(calls.images_created as u32)
    }

    unsafe fn destroy_image(&self, _image: u32) {
        let mut calls = self.calls.borrow_mut();
        calls.images_destroyed += 1;
        calls.releases.push("image");
        self.found.borrow_mut().clear();
    }

    unsafe fn set_format(&self, _image: u32, fourcc: u32) {
        self.calls.borrow_mut().format = Some(fourcc);
    }

    unsafe fn set_size(&self, _image: u32, width: u32, height: u32) {
        self.calls.borrow_mut().size = Some((width, height));
    }

    unsafe fn set_data(&self, _image: u32, data: *const u8, len: usize) {
        self.calls.borrow_mut().data = Some((data as usize, len));
    }

    unsafe fn scan(&self, _scanner: u32, _image: u32) -> i32 {
        let enabled = self.enabled();
        let found: Vec<_> = self
            .symbols
            .iter()
            .filter(|s| {
                SymbolType::try_from(s.type_code).map_or(true, |t| enabled.contains(&t))
            })
            .cloned()
            .collect();

        let mut calls = self.calls.borrow_mut();
        calls.scans += 1;
        if let Some((ptr, len)) = calls.data {
            calls.scanned_pixels = std::slice::from_raw_parts(ptr as *const u8, len).to_vec();
        }

        let status = self.scan_status.unwrap_or(found.len() as i32);
        if status >= 0 {
            *self.found.borrow_mut() = found;
        }
        status
    }

    unsafe fn first_symbol(&self, _image: u32) -> Option<usize> {
        self.calls.borrow_mut().first_symbol_calls += 1;
        (!self.found.borrow().is_empty()).then_some(0)
    }

    unsafe fn next_symbol(&self, symbol: usize) -> Option<usize> {
        (symbol + 1 < self.found.borrow().len()).then_some(symbol + 1)
    }

    unsafe fn symbol_data(&self, symbol: usize) -> Vec<u8> {
        self.found(symbol).data
    }

    unsafe fn symbol_type(&self, symbol: usize) -> i32 {
        self.found(symbol).type_code
    }

    unsafe fn symbol_quality(&self, symbol: usize) -> i32 {
        self.found(symbol).quality
    }

    unsafe fn symbol_orientation(&self, symbol: usize) -> i32 {
        self.found(symbol).orientation
    }

    unsafe fn location_count(&self, symbol: usize) -> u32 {
        self.found(symbol).points.len() as u32
    }

    unsafe fn location_x(&self, symbol: usize, index: u32) -> i32 {
        self.found(symbol).points[index as usize].0
    }

    unsafe fn location_y(&self, symbol: usize, index: u32) -> i32 {
        self.found(symbol).points[index as usize].1
    }
}
