//! service/source.rs
//! Byte-reading capability for the bound image.
//!
//! The service never interprets image contents. Whatever bytes a source
//! yields are fingerprinted as-is.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Something that can materialize the full image content.
pub trait ImageSource {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>>;
}

impl ImageSource for [u8] {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> ImageSource for [u8; N] {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ImageSource for Vec<u8> {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl ImageSource for Path {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>> {
        fs::read(self).map(Cow::Owned)
    }
}

impl ImageSource for PathBuf {
    fn read_image(&self) -> io::Result<Cow<'_, [u8]>> {
        self.as_path().read_image()
    }
}
