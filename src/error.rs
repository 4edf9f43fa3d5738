//! Error type shared by the filters, the codec and the editor session.

/// An error type for tone adjustment operations.
#[derive(thiserror::Error, Debug)]
pub enum ToneError {
    /// The input bytes could not be decoded into an image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[source] image::ImageError),

    /// The adjusted image could not be encoded.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(#[source] image::ImageError),

    /// A slider or threshold value is outside its accepted range.
    #[error("Invalid parameter {name}: {value} is outside [{min}, {max}]")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was rejected.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Flat pixel data does not match `width * height * 4`.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidBufferLength(usize, usize),

    /// The buffer could not be viewed as a (height, width, 4) array.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// The buffer is not RGBA.
    #[error("Expected 4 channels (RGBA), got {0}")]
    InvalidChannels(usize),

    /// The viewport leaves no room for a preview.
    #[error("Viewport {width}x{height} is too small for a preview")]
    InvalidViewport {
        /// Viewport width in pixels.
        width: u32,
        /// Viewport height in pixels.
        height: u32,
    },

    /// Failed to read or write a file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Failed to parse a JSON parameter or config file.
    #[error("Failed to parse the configuration. {0}")]
    ConfigError(#[from] serde_json::Error),
}
