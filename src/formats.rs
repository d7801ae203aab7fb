mod api;
mod error;
mod raster;
mod util;


pub use api::{decode_raster, encode_png, read_raster, supported_formats, write_raster};
pub use error::{IoError, Result};
