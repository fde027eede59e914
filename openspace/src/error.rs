use crate::zoom::InvalidZoom;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("OS OpenSpace requires an API key")]
    MissingApiKey,

    #[error("invalid tile service endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("tile size must be greater than zero")]
    InvalidTileSize,

    #[error("minimum zoom {min} is greater than maximum zoom {max}")]
    InvalidZoomRange { min: u8, max: u8 },

    #[error(transparent)]
    InvalidZoom(#[from] InvalidZoom),

    #[cfg(feature = "proj")]
    #[error("could not set up projection: {0}")]
    ProjectionSetup(#[from] proj::ProjCreateError),

    #[cfg(feature = "proj")]
    #[error("could not project: {0}")]
    Projection(#[from] proj::ProjError),
}
