//! WebAssembly exports for the tone filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and work on
//! the flat RGBA buffers of a canvas `ImageData` (length = width * height * 4).
//! Every call returns a new buffer; the caller keeps its pristine copy.

use wasm_bindgen::prelude::*;

use crate::codec::{decode_rgba, encode_jpeg};
use crate::error::ToneError;
use crate::filters::core::{rgba_from_slice, rgba_into_vec};
use crate::filters::histogram::{compute_histogram, render_histogram, HISTOGRAM_BUCKETS};
use crate::params::AdjustmentParameters;

fn to_js_err(e: ToneError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Parameters
// ============================================================================

/// Slider state handed over from the UI on every redraw.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmAdjustments {
    params: AdjustmentParameters,
}

#[wasm_bindgen]
impl WasmAdjustments {
    /// Defaults of a freshly loaded image.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"brightness": 10, "binarize": false}`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WasmAdjustments, JsValue> {
        let params: AdjustmentParameters =
            serde_json::from_str(json).map_err(|e| to_js_err(e.into()))?;
        params.validate().map_err(to_js_err)?;
        Ok(Self { params })
    }

    #[wasm_bindgen(setter = whitePoint)]
    pub fn set_white_point(&mut self, value: i32) {
        self.params.white_point = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: i32) {
        self.params.brightness = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_shadow(&mut self, value: i32) {
        self.params.shadow = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_highlight(&mut self, value: i32) {
        self.params.highlight = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_black(&mut self, value: i32) {
        self.params.black = value;
    }

    #[wasm_bindgen(setter = blackAndWhite)]
    pub fn set_black_and_white(&mut self, value: bool) {
        self.params.black_and_white = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_binarize(&mut self, value: bool) {
        self.params.binarize = value;
    }

    #[wasm_bindgen(setter = flipVertical)]
    pub fn set_flip_vertical(&mut self, value: bool) {
        self.params.flip_vertical = value;
    }

    #[wasm_bindgen(setter = flipHorizontal)]
    pub fn set_flip_horizontal(&mut self, value: bool) {
        self.params.flip_horizontal = value;
    }
}

// ============================================================================
// Adjustment
// ============================================================================

/// Flip and tone-map an RGBA buffer.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `adjustments` - Current slider state
///
/// # Returns
/// Flat array of adjusted RGBA bytes
#[wasm_bindgen]
pub fn adjust_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    adjustments: &WasmAdjustments,
) -> Result<Vec<u8>, JsValue> {
    let input = rgba_from_slice(data, width, height).map_err(to_js_err)?;
    let result = crate::filters::adjust::adjust(input.view(), &adjustments.params).map_err(to_js_err)?;
    Ok(rgba_into_vec(result))
}

// ============================================================================
// Histogram
// ============================================================================

/// Luminance histogram counts (255 buckets) of an RGBA buffer.
#[wasm_bindgen]
pub fn histogram_rgba_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u32>, JsValue> {
    let input = rgba_from_slice(data, width, height).map_err(to_js_err)?;
    let hist = compute_histogram(input.view()).map_err(to_js_err)?;
    Ok(hist.counts().iter().map(|&c| c.min(u32::MAX as u64) as u32).collect())
}

/// Bar chart of an RGBA buffer's histogram.
///
/// # Returns
/// Flat RGBA bytes of a `histogram_chart_width()` x `chart_height` image
#[wasm_bindgen]
pub fn histogram_chart_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    chart_height: usize,
) -> Result<Vec<u8>, JsValue> {
    let input = rgba_from_slice(data, width, height).map_err(to_js_err)?;
    let hist = compute_histogram(input.view()).map_err(to_js_err)?;
    Ok(rgba_into_vec(render_histogram(&hist, chart_height)))
}

/// Width in pixels of the chart returned by `histogram_chart_wasm`.
#[wasm_bindgen]
pub fn histogram_chart_width() -> usize {
    HISTOGRAM_BUCKETS
}

// ============================================================================
// Codec
// ============================================================================

/// Decode an encoded image file into flat RGBA bytes.
///
/// Returns `[width (u32 LE), height (u32 LE), rgba...]`.
#[wasm_bindgen]
pub fn decode_image_wasm(bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let image = decode_rgba(bytes).map_err(to_js_err)?;
    let (height, width, _) = image.dim();
    let mut out = Vec::with_capacity(8 + width * height * 4);
    out.extend_from_slice(&(width as u32).to_le_bytes());
    out.extend_from_slice(&(height as u32).to_le_bytes());
    out.extend(rgba_into_vec(image));
    Ok(out)
}

/// Encode an adjusted RGBA buffer as a maximum quality JPEG.
#[wasm_bindgen]
pub fn export_jpeg_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsValue> {
    let input = rgba_from_slice(data, width, height).map_err(to_js_err)?;
    encode_jpeg(input.view(), 100).map_err(to_js_err)
}
