//! Export module: Rasterization and PNG encoding.
//!
//! The algorithmic contract here is the cell-block rasterization and the
//! scale policy; PNG compression itself is delegated to the `image`
//! codec. Delivery (file-save dialog, share sheet) is the host's job.

mod raster;

pub use raster::{
    encode_png, export_filename, export_png, export_scale, rasterize, thumbnail, THUMBNAIL_SCALE,
};
