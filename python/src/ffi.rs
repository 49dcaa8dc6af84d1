//! ffi.rs
//! Python-facing functions and result classes.
//!
//! Design notes:
//! - One process-wide `CipherService` with the default, wire-compatible providers.
//! - Synchronous calls release the GIL while the key is stretched.
//! - `*_async` variants run on Tokio's blocking pool and return awaitables.
//! - An unreadable image raises `OSError`; a failed decryption is a normal
//!   `DecryptResult` with `success == False` and the generic error text.

use std::path::PathBuf;
use std::sync::OnceLock;

use image_cipher_core::{CipherError, CipherService, DecryptOutcome, EncryptOutcome};
use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

static SERVICE: OnceLock<CipherService> = OnceLock::new();

fn service() -> &'static CipherService {
    SERVICE.get_or_init(CipherService::new)
}

fn to_py_err(e: CipherError) -> PyErr {
    match e {
        CipherError::ImageUnavailable { .. } => PyOSError::new_err(e.to_string()),
        CipherError::Config(_) => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

/// Envelope plus the diagnostics shown next to it.
#[pyclass(frozen, module = "image_cipher")]
#[derive(Clone, Debug)]
pub struct EncryptResult {
    #[pyo3(get)]
    envelope: String,
    #[pyo3(get)]
    image_size: usize,
    #[pyo3(get)]
    fingerprint_preview: String,
    #[pyo3(get)]
    salt_preview: String,
    #[pyo3(get)]
    nonce_preview: String,
    #[pyo3(get)]
    envelope_size: usize,
}

impl From<EncryptOutcome> for EncryptResult {
    fn from(o: EncryptOutcome) -> Self {
        Self {
            envelope: o.envelope,
            image_size: o.stats.image_size,
            fingerprint_preview: o.stats.fingerprint_preview,
            salt_preview: o.stats.salt_preview,
            nonce_preview: o.stats.nonce_preview,
            envelope_size: o.stats.envelope_size,
        }
    }
}

#[pymethods]
impl EncryptResult {
    fn __repr__(&self) -> String {
        format!(
            "EncryptResult(image_size={}, envelope_size={}, fingerprint={})",
            self.image_size, self.envelope_size, self.fingerprint_preview
        )
    }
}

#[pyclass(frozen, module = "image_cipher")]
#[derive(Clone, Debug)]
pub struct DecryptResult {
    #[pyo3(get)]
    success: bool,
    #[pyo3(get)]
    message: Option<String>,
    #[pyo3(get)]
    error: Option<String>,
    #[pyo3(get)]
    image_size: Option<usize>,
    #[pyo3(get)]
    fingerprint_preview: Option<String>,
}

impl From<DecryptOutcome> for DecryptResult {
    fn from(o: DecryptOutcome) -> Self {
        match o {
            DecryptOutcome::Success { message, stats } => Self {
                success: true,
                message: Some(message),
                error: None,
                image_size: Some(stats.image_size),
                fingerprint_preview: Some(stats.fingerprint_preview),
            },
            DecryptOutcome::Failure { reason } => Self {
                success: false,
                message: None,
                error: Some(reason),
                image_size: None,
                fingerprint_preview: None,
            },
        }
    }
}

#[pymethods]
impl DecryptResult {
    fn __repr__(&self) -> String {
        format!("DecryptResult(success={})", if self.success { "True" } else { "False" })
    }

    fn __bool__(&self) -> bool {
        self.success
    }
}

#[pyfunction]
fn encrypt_message(py: Python<'_>, image: &[u8], password: &str, message: &str) -> PyResult<EncryptResult> {
    py.allow_threads(|| service().encrypt(image, password, message))
        .map(EncryptResult::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn decrypt_message(py: Python<'_>, image: &[u8], password: &str, envelope: &str) -> PyResult<DecryptResult> {
    py.allow_threads(|| service().decrypt(image, password, envelope))
        .map(DecryptResult::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn encrypt_file(py: Python<'_>, path: PathBuf, password: &str, message: &str) -> PyResult<EncryptResult> {
    py.allow_threads(|| service().encrypt(&path, password, message))
        .map(EncryptResult::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn decrypt_file(py: Python<'_>, path: PathBuf, password: &str, envelope: &str) -> PyResult<DecryptResult> {
    py.allow_threads(|| service().decrypt(&path, password, envelope))
        .map(DecryptResult::from)
        .map_err(to_py_err)
}

#[pyfunction]
fn encrypt_message_async(
    py: Python<'_>,
    image: Vec<u8>,
    password: String,
    message: String,
) -> PyResult<Bound<'_, PyAny>> {
    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        tokio::task::spawn_blocking(move || service().encrypt(&image, &password, &message))
            .await
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?
            .map(EncryptResult::from)
            .map_err(to_py_err)
    })
}

#[pyfunction]
fn decrypt_message_async(
    py: Python<'_>,
    image: Vec<u8>,
    password: String,
    envelope: String,
) -> PyResult<Bound<'_, PyAny>> {
    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        tokio::task::spawn_blocking(move || service().decrypt(&image, &password, &envelope))
            .await
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?
            .map(DecryptResult::from)
            .map_err(to_py_err)
    })
}

/// Install a `tracing` subscriber writing to stderr. Later calls are no-ops.
#[pyfunction]
#[pyo3(signature = (level=None))]
fn init_logging(level: Option<&str>) -> PyResult<()> {
    let filter = EnvFilter::try_new(level.unwrap_or("info"))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
    Ok(())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<EncryptResult>()?;
    m.add_class::<DecryptResult>()?;
    m.add_function(wrap_pyfunction!(encrypt_message, m)?)?;
    m.add_function(wrap_pyfunction!(decrypt_message, m)?)?;
    m.add_function(wrap_pyfunction!(encrypt_file, m)?)?;
    m.add_function(wrap_pyfunction!(decrypt_file, m)?)?;
    m.add_function(wrap_pyfunction!(encrypt_message_async, m)?)?;
    m.add_function(wrap_pyfunction!(decrypt_message_async, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
