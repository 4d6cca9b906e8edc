//! FFI bindings to the system libzbar
//!
//! Only the entry points used by [`crate::native::Zbar`] are declared. The
//! link directive comes from `build.rs`.

use libc::{c_char, c_int, c_uint, c_ulong, c_void};

#[repr(C)]
#[allow(non_camel_case_types)]
pub struct zbar_image_scanner_t {
    _private: [u8; 0],
}

#[repr(C)]
#[allow(non_camel_case_types)]
pub struct zbar_image_t {
    _private: [u8; 0],
}

#[repr(C)]
#[allow(non_camel_case_types)]
pub struct zbar_symbol_t {
    _private: [u8; 0],
}

/// `void (*)(zbar_image_t *)`
#[allow(non_camel_case_types)]
pub type zbar_image_cleanup_handler_t = Option<unsafe extern "C" fn(image: *mut zbar_image_t)>;

extern "C" {
    pub fn zbar_image_scanner_create() -> *mut zbar_image_scanner_t;
    pub fn zbar_image_scanner_destroy(scanner: *mut zbar_image_scanner_t);
    pub fn zbar_image_scanner_set_config(
        scanner: *mut zbar_image_scanner_t,
        symbology: c_int,
        config: c_int,
        value: c_int,
    ) -> c_int;
    pub fn zbar_scan_image(scanner: *mut zbar_image_scanner_t, image: *mut zbar_image_t) -> c_int;

    pub fn zbar_image_create() -> *mut zbar_image_t;
    pub fn zbar_image_destroy(image: *mut zbar_image_t);
    pub fn zbar_image_set_format(image: *mut zbar_image_t, format: c_ulong);
    pub fn zbar_image_set_size(image: *mut zbar_image_t, width: c_uint, height: c_uint);
    pub fn zbar_image_set_data(
        image: *mut zbar_image_t,
        data: *const c_void,
        data_byte_length: c_ulong,
        cleanup_hndlr: zbar_image_cleanup_handler_t,
    );
    pub fn zbar_image_first_symbol(image: *const zbar_image_t) -> *const zbar_symbol_t;

    pub fn zbar_symbol_next(symbol: *const zbar_symbol_t) -> *const zbar_symbol_t;
    pub fn zbar_symbol_get_type(symbol: *const zbar_symbol_t) -> c_int;
    pub fn zbar_symbol_get_data(symbol: *const zbar_symbol_t) -> *const c_char;
    pub fn zbar_symbol_get_data_length(symbol: *const zbar_symbol_t) -> c_uint;
    pub fn zbar_symbol_get_quality(symbol: *const zbar_symbol_t) -> c_int;
    pub fn zbar_symbol_get_orientation(symbol: *const zbar_symbol_t) -> c_int;
    pub fn zbar_symbol_get_loc_size(symbol: *const zbar_symbol_t) -> c_uint;
    pub fn zbar_symbol_get_loc_x(symbol: *const zbar_symbol_t, index: c_uint) -> c_int;
    pub fn zbar_symbol_get_loc_y(symbol: *const zbar_symbol_t, index: c_uint) -> c_int;
}
