//! Crate error type.

use gdal::errors::GdalError;
use thiserror::Error;

/// Error type for raster/array conversions.
///
/// Nearly every failure originates inside GDAL (unopenable path,
/// unsupported format, unwritable output) and is passed through
/// unchanged; the only condition checked by this crate itself is an
/// array with a zero-length axis, which GDAL would otherwise turn into
/// an opaque dataset-creation failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Gdal(#[from] GdalError),

    #[error("cannot write a {rows}x{cols} array: both dimensions must be non-zero")]
    EmptyArray { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
