#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

pub mod crs;
mod error;
pub mod extras;
pub mod licensing;
mod position;
pub mod sources;
mod tiles;
mod zoom;

pub use crs::{CoordinateSystem, InvalidResolutions, Resolutions};
pub use error::Error;
pub use position::{MapUnits, Position, lat_lon, lon_lat};
pub use tiles::TileId;
pub use zoom::InvalidZoom;
