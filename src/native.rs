//! [`Engine`] backed by the system libzbar

use std::ptr::{self, NonNull};

use libc::{c_int, c_ulong, c_void};

use crate::engine::{ConfigOption, Engine};
use crate::ffi::{self, zbar_image_scanner_t, zbar_image_t, zbar_symbol_t};
use crate::SymbolType;

/// The system libzbar
///
/// Holds no state of its own; every scanner and image is created and
/// destroyed per decode call. Calling into it from several threads at once
/// is only sound if the linked libzbar allocates independent handles
/// reentrantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zbar;

impl Engine for Zbar {
    type Scanner = NonNull<zbar_image_scanner_t>;
    type Image = NonNull<zbar_image_t>;
    type Symbol = NonNull<zbar_symbol_t>;

    fn create_scanner(&self) -> Option<Self::Scanner> {
        NonNull::new(unsafe { ffi::zbar_image_scanner_create() })
    }

    unsafe fn destroy_scanner(&self, scanner: Self::Scanner) {
        ffi::zbar_image_scanner_destroy(scanner.as_ptr());
    }

    unsafe fn set_config(
        &self,
        scanner: Self::Scanner,
        symbol: SymbolType,
        option: ConfigOption,
        value: i32,
    ) -> i32 {
        ffi::zbar_image_scanner_set_config(
            scanner.as_ptr(),
            i32::from(symbol) as c_int,
            i32::from(option) as c_int,
            value as c_int,
        )
    }

    fn create_image(&self) -> Option<Self::Image> {
        NonNull::new(unsafe { ffi::zbar_image_create() })
    }

    unsafe fn destroy_image(&self, image: Self::Image) {
        ffi::zbar_image_destroy(image.as_ptr());
    }

    unsafe fn set_format(&self, image: Self::Image, fourcc: u32) {
        ffi::zbar_image_set_format(image.as_ptr(), fourcc as c_ulong);
    }

    unsafe fn set_size(&self, image: Self::Image, width: u32, height: u32) {
        ffi::zbar_image_set_size(image.as_ptr(), width, height);
    }

    unsafe fn set_data(&self, image: Self::Image, data: *const u8, len: usize) {
        // No cleanup handler: the buffer belongs to the caller.
        ffi::zbar_image_set_data(
            image.as_ptr(),
            data as *const c_void,
            len as c_ulong,
            None,
        );
    }

    unsafe fn scan(&self, scanner: Self::Scanner, image: Self::Image) -> i32 {
        ffi::zbar_scan_image(scanner.as_ptr(), image.as_ptr())
    }

    unsafe fn first_symbol(&self, image: Self::Image) -> Option<Self::Symbol> {
        NonNull::new(ffi::zbar_image_first_symbol(image.as_ptr()) as *mut zbar_symbol_t)
    }

    unsafe fn next_symbol(&self, symbol: Self::Symbol) -> Option<Self::Symbol> {
        NonNull::new(ffi::zbar_symbol_next(symbol.as_ptr()) as *mut zbar_symbol_t)
    }

    unsafe fn symbol_data(&self, symbol: Self::Symbol) -> Vec<u8> {
        let data = ffi::zbar_symbol_get_data(symbol.as_ptr());
        if data.is_null() {
            return Vec::new();
        }
        let len = ffi::zbar_symbol_get_data_length(symbol.as_ptr()) as usize;
        let mut out = vec![0u8; len];
        ptr::copy_nonoverlapping(data as *const u8, out.as_mut_ptr(), len);
        out
    }

    unsafe fn symbol_type(&self, symbol: Self::Symbol) -> i32 {
        ffi::zbar_symbol_get_type(symbol.as_ptr())
    }

    unsafe fn symbol_quality(&self, symbol: Self::Symbol) -> i32 {
        ffi::zbar_symbol_get_quality(symbol.as_ptr())
    }

    unsafe fn symbol_orientation(&self, symbol: Self::Symbol) -> i32 {
        ffi::zbar_symbol_get_orientation(symbol.as_ptr())
    }

    unsafe fn location_count(&self, symbol: Self::Symbol) -> u32 {
        ffi::zbar_symbol_get_loc_size(symbol.as_ptr())
    }

    unsafe fn location_x(&self, symbol: Self::Symbol, index: u32) -> i32 {
        ffi::zbar_symbol_get_loc_x(symbol.as_ptr(), index)
    }

    unsafe fn location_y(&self, symbol: Self::Symbol, index: u32) -> i32 {
        ffi::zbar_symbol_get_loc_y(symbol.as_ptr(), index)
    }
}
