//! tonestag
//!
//! Tone adjustment for RGBA images: luminance driven brightness, shadow,
//! highlight and black-point curves, black & white conversion, white point
//! binarization, axis flips and a luminance histogram with a bar chart
//! rendering. Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! All filters work on RGBA8 images as `(height, width, 4)` arrays of `u8`.
//! Flat canvas `ImageData` buffers are converted with
//! [`filters::core::rgba_from_slice`]. Filters return a new array and never
//! modify their input, so every redraw can start from the pristine source.
//!
//! ## Luminance
//! Tone decisions and histogram buckets use `0.34 R + 0.5 G + 0.16 B`.
//!
//! ## Layers
//! - [`filters`] - pure per-pixel operations and the histogram
//! - [`codec`] - decoding and JPEG/PNG encoding
//! - [`editor`] - a loaded image, its preview and the current parameters

pub mod codec;
pub mod editor;
pub mod error;
pub mod filters;
pub mod params;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use editor::{Editor, Rendered, Viewport};
pub use error::ToneError;
pub use filters::adjust::adjust;
pub use filters::histogram::{compute_histogram, render_histogram, Histogram};
pub use params::{AdjustmentParameters, EditorConfig};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::ToneError;
    use crate::filters::binarize as binarize_mod;
    use crate::filters::flip as flip_mod;
    use crate::filters::{histogram, tone_curve};
    use crate::params::AdjustmentParameters;

    fn to_py_err(e: ToneError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }

    // ========================================================================
    // Full adjustment pass
    // ========================================================================

    /// Flip, then binarize or apply curves, exactly like one editor redraw.
    ///
    /// Input is an RGBA u8 image of shape (H, W, 4). Returns a new array.
    #[pyfunction]
    #[pyo3(signature = (
        image,
        white_point=180,
        brightness=0,
        shadow=0,
        highlight=0,
        black=0,
        black_and_white=false,
        binarize=false,
        flip_vertical=false,
        flip_horizontal=false,
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn adjust<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        white_point: i32,
        brightness: i32,
        shadow: i32,
        highlight: i32,
        black: i32,
        black_and_white: bool,
        binarize: bool,
        flip_vertical: bool,
        flip_horizontal: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let params = AdjustmentParameters {
            white_point,
            brightness,
            shadow,
            highlight,
            black,
            black_and_white,
            binarize,
            flip_vertical,
            flip_horizontal,
        };
        let result = crate::filters::adjust::adjust(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Individual filters
    // ========================================================================

    #[pyfunction]
    #[pyo3(signature = (image, brightness=0, shadow=0, highlight=0, black=0, black_and_white=false))]
    pub fn curves<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        brightness: i32,
        shadow: i32,
        highlight: i32,
        black: i32,
        black_and_white: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let params = AdjustmentParameters {
            brightness,
            shadow,
            highlight,
            black,
            black_and_white,
            ..Default::default()
        };
        let result = tone_curve::apply_curves(image.as_array(), &params).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    #[pyo3(signature = (image, white_point=180))]
    pub fn binarize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        white_point: u8,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = binarize_mod::binarize_u8(image.as_array(), white_point).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    #[pyo3(signature = (image, vertical=false, horizontal=false))]
    pub fn flip<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        vertical: bool,
        horizontal: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = flip_mod::flip_rgba(image.as_array(), vertical, horizontal).map_err(to_py_err)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Histogram
    // ========================================================================

    /// Luminance histogram as a list of 255 counts.
    #[pyfunction]
    pub fn luminance_histogram(image: PyReadonlyArray3<'_, u8>) -> PyResult<Vec<u64>> {
        let hist = histogram::compute_histogram(image.as_array()).map_err(to_py_err)?;
        Ok(hist.counts().to_vec())
    }

    /// Bar chart of the image's luminance histogram, shape (height, 255, 4).
    #[pyfunction]
    pub fn histogram_chart<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        height: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let hist = histogram::compute_histogram(image.as_array()).map_err(to_py_err)?;
        Ok(histogram::render_histogram(&hist, height).into_pyarray(py))
    }

    /// tonestag extension module
    #[pymodule]
    pub fn tonestag(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(adjust, m)?)?;
        m.add_function(wrap_pyfunction!(curves, m)?)?;
        m.add_function(wrap_pyfunction!(binarize, m)?)?;
        m.add_function(wrap_pyfunction!(flip, m)?)?;
        m.add_function(wrap_pyfunction!(luminance_histogram, m)?)?;
        m.add_function(wrap_pyfunction!(histogram_chart, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::tonestag;
