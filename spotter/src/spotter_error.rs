use openxr::sys::Result as OpenXRResult;
use thiserror::Error;

/// Things that can go wrong while setting up or talking to the XR runtime.
#[derive(Error, Debug)]
pub enum SpotterError {
    /// There was a problem with an OpenXR operation
    #[error("There was a problem with an OpenXR operation")]
    OpenXRError(#[from] OpenXRResult),
    /// Wrapper around `std::io::Error`
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// Wrapper around `anyhow::Error`
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
