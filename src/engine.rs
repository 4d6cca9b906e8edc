//! Contract of the external scanning engine
//!
//! The decode pipeline never talks to libzbar directly; it drives an
//! [`Engine`], which mirrors the handful of libzbar entry points the pipeline
//! needs. [`crate::native::Zbar`] forwards them to the system library.
//!
//! # Safety
//!
//! Every method that takes a handle is `unsafe`: the handle must have been
//! returned by the same engine and must not have been destroyed yet. Symbol
//! handles are additionally only valid while the image they were found in is
//! alive. The safe wrappers in [`crate::scanner`], [`crate::image`] and
//! [`crate::symbol`] uphold this through ownership and borrows.

use crate::SymbolType;

/// Create a fourcc code from 4 bytes
pub const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | ((b as u32) << 8) | ((c as u32) << 16) | ((d as u32) << 24)
}

/// Pixel format tags understood by the engine
pub struct Fourcc;

impl Fourcc {
    /// 8-bit grayscale (`"Y800"`, 808466521)
    pub const Y800: u32 = fourcc(b'Y', b'8', b'0', b'0');
    /// Same as [`Fourcc::Y800`] (`"GREY"`, 1497715271)
    pub const GRAY: u32 = fourcc(b'G', b'R', b'E', b'Y');
}

/// Scanner configuration options (`zbar_config_t`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    Enable = 0,
    AddCheck = 1,
    EmitCheck = 2,
    Ascii = 3,
    MinLength = 0x20,
    MaxLength = 0x21,
    Uncertainty = 0x40,
    Position = 0x80,
    XDensity = 0x100,
    YDensity = 0x101,
}

impl From<ConfigOption> for i32 {
    fn from(value: ConfigOption) -> Self {
        value as i32
    }
}

/// A barcode scanning engine with manually managed native handles
pub trait Engine {
    type Scanner: Copy;
    type Image: Copy;
    type Symbol: Copy;

    /// `None` when the engine could not allocate a scanner
    fn create_scanner(&self) -> Option<Self::Scanner>;

    unsafe fn destroy_scanner(&self, scanner: Self::Scanner);

    /// Returns the engine status; zero means the option was accepted.
    unsafe fn set_config(
        &self,
        scanner: Self::Scanner,
        symbol: SymbolType,
        option: ConfigOption,
        value: i32,
    ) -> i32;

    /// `None` when the engine could not allocate an image
    fn create_image(&self) -> Option<Self::Image>;

    unsafe fn destroy_image(&self, image: Self::Image);

    unsafe fn set_format(&self, image: Self::Image, fourcc: u32);

    unsafe fn set_size(&self, image: Self::Image, width: u32, height: u32);

    /// Points the image at `len` bytes at `data` without copying them. The
    /// engine never frees the buffer; it must stay put until the image is
    /// destroyed.
    unsafe fn set_data(&self, image: Self::Image, data: *const u8, len: usize);

    /// Negative on failure, otherwise the number of symbols found.
    unsafe fn scan(&self, scanner: Self::Scanner, image: Self::Image) -> i32;

    unsafe fn first_symbol(&self, image: Self::Image) -> Option<Self::Symbol>;

    unsafe fn next_symbol(&self, symbol: Self::Symbol) -> Option<Self::Symbol>;

    unsafe fn symbol_data(&self, symbol: Self::Symbol) -> Vec<u8>;

    unsafe fn symbol_type(&self, symbol: Self::Symbol) -> i32;

    unsafe fn symbol_quality(&self, symbol: Self::Symbol) -> i32;

    /// `-1` when unknown, otherwise `0..=3` (up, right, down, left)
    unsafe fn symbol_orientation(&self, symbol: Self::Symbol) -> i32;

    unsafe fn location_count(&self, symbol: Self::Symbol) -> u32;

    unsafe fn location_x(&self, symbol: Self::Symbol, index: u32) -> i32;

    unsafe fn location_y(&self, symbol: Self::Symbol, index: u32) -> i32;
}
