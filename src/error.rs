use thiserror::Error;

/// Failures outside the tracing pipeline. Tracing itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),

    #[error("Image output error: {0}")]
    Image(#[from] ::image::ImageError),

    #[error("EXR output error: {0}")]
    Exr(#[from] ::exr::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
