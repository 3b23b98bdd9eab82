use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal failures. Anything here aborts startup or ends the frame loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not allocate a {width}x{height} raster: {reason}")]
    ResourceInit {
        width: usize,
        height: usize,
        reason: String,
    },
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("pixel texture error: {0}")]
    Texture(#[from] pixels::TextureError),
}

impl Error {
    pub(crate) fn resource(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Error::ResourceInit {
            width,
            height,
            reason: reason.into(),
        }
    }
}
