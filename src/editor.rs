//! Editor session: a pristine source, its preview and the current sliders.
//!
//! The session owns the decoded image and never modifies it. Every redraw
//! starts again from the pristine preview with the full parameter set, so
//! lossy operations like binarize never compound. Loading a new image resets
//! the parameters to the configured initial ones.

use std::path::Path;

use ndarray::{Array3, ArrayView3};

use crate::codec::{decode_rgba, encode_jpeg, resize_rgba};
use crate::error::ToneError;
use crate::filters::adjust::adjust;
use crate::filters::histogram::{compute_histogram, render_histogram, Histogram};
use crate::params::{AdjustmentParameters, EditorConfig};

/// Size of the area the editor is displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Viewport of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fit an image of `src_width` x `src_height` into the preview area.
    ///
    /// The preview starts as a square of side `height - margin_y`; the
    /// longer source side takes the full side and the other keeps the aspect
    /// ratio. If the width then exceeds `width - margin_x` the preview is
    /// scaled down to that width.
    pub fn fit_preview(
        &self,
        src_width: u32,
        src_height: u32,
        config: &EditorConfig,
    ) -> Result<(u32, u32), ToneError> {
        let side = self.height.saturating_sub(config.preview_margin_y) as f64;
        let max_width = self.width.saturating_sub(config.preview_margin_x) as f64;
        if side < 1.0 || max_width < 1.0 {
            return Err(ToneError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if src_width == 0 || src_height == 0 {
            return Ok((0, 0));
        }

        let (mut width, mut height) = if src_width > src_height {
            (side, src_height as f64 * side / src_width as f64)
        } else {
            (src_width as f64 * side / src_height as f64, side)
        };

        if width > max_width {
            height = height * max_width / width;
            width = max_width;
        }

        // canvas sizes truncate; keep at least one pixel per axis
        Ok(((width as u32).max(1), (height as u32).max(1)))
    }

    /// Rows of the histogram chart.
    pub fn histogram_height(&self, config: &EditorConfig) -> usize {
        self.height.saturating_sub(config.histogram_margin_y) as usize
    }
}

/// Output of one redraw.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Adjusted preview, (height, width, 4).
    pub image: Array3<u8>,
    /// Histogram of the adjusted preview.
    pub histogram: Histogram,
    /// Bar chart of `histogram`, (histogram height, 255, 4).
    pub chart: Array3<u8>,
}

/// One loaded image and its adjustment state.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    viewport: Viewport,
    source: Array3<u8>,
    preview: Array3<u8>,
    params: AdjustmentParameters,
}

impl Editor {
    /// Start a session on an already decoded RGBA image.
    pub fn new(
        source: Array3<u8>,
        viewport: Viewport,
        config: EditorConfig,
    ) -> Result<Self, ToneError> {
        config.validate()?;
        let (height, width, _) = source.dim();
        let (preview_width, preview_height) =
            viewport.fit_preview(width as u32, height as u32, &config)?;
        let preview = resize_rgba(source.view(), preview_width, preview_height)?;
        log::info!(
            "loaded {}x{} image, preview {}x{}",
            width,
            height,
            preview_width,
            preview_height
        );

        Ok(Self {
            config,
            viewport,
            source,
            preview,
            params: config.initial_params(),
        })
    }

    /// Decode an encoded image and start a session on it.
    pub fn load(bytes: &[u8], viewport: Viewport, config: EditorConfig) -> Result<Self, ToneError> {
        let source = decode_rgba(bytes)?;
        Self::new(source, viewport, config)
    }

    /// Read, decode and start a session on an image file.
    pub fn open(
        path: impl AsRef<Path>,
        viewport: Viewport,
        config: EditorConfig,
    ) -> Result<Self, ToneError> {
        let bytes = std::fs::read(path)?;
        Self::load(&bytes, viewport, config)
    }

    /// Replace the loaded image; parameters go back to their initial values.
    pub fn replace_source(&mut self, bytes: &[u8]) -> Result<(), ToneError> {
        *self = Self::load(bytes, self.viewport, self.config)?;
        Ok(())
    }

    /// Parameters used by the next redraw or export.
    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    /// Set the parameters used by the next redraw or export.
    ///
    /// Invalid parameters are rejected and the current ones kept.
    pub fn set_params(&mut self, params: AdjustmentParameters) -> Result<(), ToneError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Put every slider back to its initial value.
    pub fn reset(&mut self) {
        self.params = self.config.initial_params();
    }

    /// The untouched decoded image.
    pub fn source(&self) -> ArrayView3<'_, u8> {
        self.source.view()
    }

    /// The untouched preview-sized image.
    pub fn preview(&self) -> ArrayView3<'_, u8> {
        self.preview.view()
    }

    /// Current display size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the display size; the preview is re-fitted from the source.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ToneError> {
        let (height, width, _) = self.source.dim();
        let (preview_width, preview_height) =
            viewport.fit_preview(width as u32, height as u32, &self.config)?;
        self.preview = resize_rgba(self.source.view(), preview_width, preview_height)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Histogram of the unadjusted preview, as shown right after loading.
    pub fn initial_histogram(&self) -> Result<Histogram, ToneError> {
        compute_histogram(self.preview.view())
    }

    /// Adjust the preview with the current parameters.
    pub fn redraw(&self) -> Result<Rendered, ToneError> {
        let image = adjust(self.preview.view(), &self.params)?;
        let histogram = compute_histogram(image.view())?;
        let chart = render_histogram(&histogram, self.viewport.histogram_height(&self.config));
        Ok(Rendered {
            image,
            histogram,
            chart,
        })
    }

    /// Adjust the full resolution source with the current parameters.
    pub fn render_full(&self) -> Result<Array3<u8>, ToneError> {
        adjust(self.source.view(), &self.params)
    }

    /// Full resolution JPEG at the configured quality.
    pub fn export_jpeg(&self) -> Result<Vec<u8>, ToneError> {
        let image = self.render_full()?;
        let jpeg = encode_jpeg(image.view(), self.config.export_quality)?;
        log::info!("exported {} byte jpeg", jpeg.len());
        Ok(jpeg)
    }
}
