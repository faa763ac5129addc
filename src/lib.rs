//! Conversions between [GDAL](https://gdal.org/) rasters and
//! [`ndarray`] 2-D arrays.
//!
//! Three stateless helpers cover the usual glue between raster files and
//! in-memory arrays:
//!
//!  * [`raster_to_array`]: read band 1 of a raster into an [`Array2`];
//!  * [`coord_to_pixel_offset`]: map a geographic coordinate to integer
//!    `(col, row)` pixel offsets using a reference raster's geotransform;
//!  * [`array_to_raster`]: write an [`Array2`] as a single-band GeoTIFF,
//!    copying the geotransform and spatial reference of a reference
//!    raster.
//!
//! Each call opens its own dataset handles and releases them on return,
//! on error paths included; no state is shared between calls.
//!
//! # Example
//!
//! ```rust, no_run
//! # fn main() -> raster_array::errors::Result<()> {
//! use raster_array::{array_to_raster, coord_to_pixel_offset, raster_to_array};
//!
//! let pixels = raster_to_array::<u16, _>("input.tif")?;
//! let (col, row) = coord_to_pixel_offset("input.tif", 135.0, 165.0)?;
//! println!("value at ({col}, {row}): {}", pixels[[row as usize, col as usize]]);
//! array_to_raster("output.tif", "input.tif", pixels)?;
//! # Ok(())
//! # }
//! ```

mod convert;
pub mod errors;

pub use convert::{array_to_raster, coord_to_pixel_offset, raster_to_array};
pub use errors::Error;
pub use gdal::raster::GdalType;
pub use ndarray::Array2;
