//! image-cipher-python
//!
//! Python bindings for image-cipher-core (PyO3).

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn image_cipher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)?;
    Ok(())
}
