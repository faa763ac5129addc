//! Raster/array conversions and coordinate mapping.

use std::path::Path;

use gdal::raster::{Buffer, GdalType};
use gdal::spatial_ref::SpatialRef;
use gdal::{Dataset, DriverManager};
use ndarray::Array2;

use crate::errors::{Error, Result};

/// Reads band 1 of the raster at `path` into an [`Array2<T>`].
///
/// The full extent of the band is read in one shot, with element
/// conversion to `T` performed by GDAL's raster I/O. The returned array
/// has shape `(rows, cols)`, i.e. `(raster height, raster width)`.
///
/// Rasters with more than one band silently expose only band 1, and
/// no-data values are passed through like any other pixel.
pub fn raster_to_array<T: Copy + GdalType, P: AsRef<Path>>(path: P) -> Result<Array2<T>> {
    let dataset = Dataset::open(path)?;
    let band = dataset.rasterband(1)?;
    Ok(band.read_band_as::<T>()?.to_array()?)
}

/// Converts a geographic `(x, y)` coordinate into `(col, row)` pixel
/// offsets for the raster at `reference_path`.
///
/// The coordinate must be in the CRS of the reference raster; this is
/// not validated. Offsets are not checked against the raster's actual
/// size, so a coordinate outside its extent yields an out-of-range
/// offset without error.
///
/// The quotients are truncated toward zero (`as isize`), not floored.
/// For coordinates left of or above the origin the two disagree: a
/// coordinate half a pixel left of the origin maps to column `0`, not
/// `-1`. Callers relying on negative offsets should floor themselves.
pub fn coord_to_pixel_offset<P: AsRef<Path>>(
    reference_path: P,
    x: f64,
    y: f64,
) -> Result<(isize, isize)> {
    let dataset = Dataset::open(reference_path)?;
    let [origin_x, pixel_width, _, origin_y, _, pixel_height] = dataset.geo_transform()?;
    let col = ((x - origin_x) / pixel_width) as isize;
    let row = ((y - origin_y) / pixel_height) as isize;
    Ok((col, row))
}

/// Writes `array` as a single-band GeoTIFF at `out_path`, georeferenced
/// like the raster at `reference_path`.
///
/// The output dimensions are taken from the array's shape
/// (`(rows, cols)`), and its band type is `T`. The reference raster
/// contributes its geotransform origin and pixel sizes — the rotation
/// terms are always written as zero, so a skewed reference produces an
/// axis-aligned output — and its spatial reference, copied through a
/// WKT round-trip.
///
/// The band cache is flushed before returning, so the pixel data is on
/// disk by the time the call succeeds; the dataset handle itself is
/// released when it goes out of scope.
///
/// Arrays with a zero-length axis are rejected with
/// [`Error::EmptyArray`]. Everything else (unwritable path, reference
/// raster problems) surfaces as the underlying GDAL error.
pub fn array_to_raster<T: Copy + GdalType, P: AsRef<Path>, Q: AsRef<Path>>(
    out_path: P,
    reference_path: Q,
    array: Array2<T>,
) -> Result<()> {
    let (rows, cols) = array.dim();
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyArray { rows, cols });
    }

    let reference = Dataset::open(reference_path)?;
    let [origin_x, pixel_width, _, origin_y, _, pixel_height] = reference.geo_transform()?;

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dataset = driver.create_with_band_type::<T, _>(out_path, cols, rows, 1)?;
    dataset.set_geo_transform(&[origin_x, pixel_width, 0.0, origin_y, 0.0, pixel_height])?;

    let srs = SpatialRef::from_wkt(&reference.projection())?;
    dataset.set_projection(&srs.to_wkt()?)?;

    let mut buffer = Buffer::from(array);
    {
        let mut band = dataset.rasterband(1)?;
        band.write((0, 0), (cols, rows), &mut buffer)?;
    }
    dataset.flush_cache()?;
    Ok(())
}
