//! Engine image objects bound to caller pixels

use std::marker::PhantomData;

use crate::engine::{Engine, Fourcc};
use crate::error::Resource;
use crate::pixels::CanonicalImage;
use crate::symbol::SymbolIter;
use crate::{Error, Result};

/// An engine image viewing a [`CanonicalImage`]'s pixels, destroyed when
/// dropped
///
/// The engine reads the pixels in place, so the image borrows them for
/// `'buf`. Symbols found by a scan belong to the image and are released
/// with it.
pub struct Image<'e, 'buf, E: Engine> {
    engine: &'e E,
    handle: E::Image,
    _pixels: PhantomData<&'buf [u8]>,
}

impl<'e, 'buf, E: Engine> Image<'e, 'buf, E> {
    /// Create an engine image over `pixels` as `Y800` grayscale.
    pub fn new(engine: &'e E, pixels: &'buf CanonicalImage<'_>) -> Result<Self> {
        let handle = engine
            .create_image()
            .ok_or(Error::ResourceCreation(Resource::Image))?;
        let image = Image {
            engine,
            handle,
            _pixels: PhantomData,
        };

        let data = pixels.pixels();
        unsafe {
            engine.set_format(handle, Fourcc::Y800);
            engine.set_size(handle, pixels.width(), pixels.height());
            engine.set_data(handle, data.as_ptr(), data.len());
        }
        log::debug!(
            "created image {}x{} ({} bytes)",
            pixels.width(),
            pixels.height(),
            data.len()
        );
        Ok(image)
    }

    /// Symbols found by the last scan, in engine order
    pub fn symbols(&self) -> SymbolIter<'_, E> {
        unsafe { SymbolIter::new(self.engine, self.handle) }
    }

    pub(crate) fn handle(&self) -> E::Image {
        self.handle
    }
}

impl<E: Engine> Drop for Image<'_, '_, E> {
    fn drop(&mut self) {
        unsafe { self.engine.destroy_image(self.handle) };
        log::debug!("destroyed image");
    }
}
