//! Types and functions for working with positions.

/// Geographical position with latitude and longitude (WGS84).
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude. Note that it is common standard to write
/// coordinates starting with the latitude instead (e.g. `51.50135, -0.14189` is Buckingham
/// Palace).
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// Location projected on the British National Grid, in metres.
pub type MapUnits = geo_types::Point;
