//! Adjustment parameters and editor configuration.
//!
//! `AdjustmentParameters` is the immutable value a UI rebuilds from its
//! sliders on every redraw. `EditorConfig` holds the layout constants of the
//! editor (viewport margins, export quality, the white point a fresh image
//! starts with) and can be read from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ToneError;

/// White point a freshly loaded image starts with.
pub const DEFAULT_WHITE_POINT: i32 = 180;

/// Slider values for one tone-mapping pass.
///
/// Missing JSON fields take their default, so `{"brightness": 20}` is a
/// valid parameter file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Binarize threshold, 0-255.
    pub white_point: i32,
    /// Constant offset added to every color channel.
    pub brightness: i32,
    /// Offset weighted towards dark pixels.
    pub shadow: i32,
    /// Offset weighted towards bright pixels.
    pub highlight: i32,
    /// Offset weighted by the black-point table.
    pub black: i32,
    /// Force R=G=B to the adjusted luminance.
    pub black_and_white: bool,
    /// Threshold against the white point instead of applying curves.
    pub binarize: bool,
    /// Mirror rows (top becomes bottom).
    pub flip_vertical: bool,
    /// Mirror columns (left becomes right).
    pub flip_horizontal: bool,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            white_point: DEFAULT_WHITE_POINT,
            brightness: 0,
            shadow: 0,
            highlight: 0,
            black: 0,
            black_and_white: false,
            binarize: false,
            flip_vertical: false,
            flip_horizontal: false,
        }
    }
}

impl AdjustmentParameters {
    /// Parameters for a freshly loaded image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Reject values the engine does not accept.
    ///
    /// Only the white point has a bounded range; the signed offsets may take
    /// any value since the result is clamped per channel.
    pub fn validate(&self) -> Result<(), ToneError> {
        if !(0..=255).contains(&self.white_point) {
            return Err(ToneError::InvalidParameter {
                name: "white_point",
                value: self.white_point as i64,
                min: 0,
                max: 255,
            });
        }
        Ok(())
    }

    /// Read parameters from a JSON file and validate them.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ToneError> {
        let text = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }
}

/// Layout and export settings of the editor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Space reserved above and below the preview.
    pub preview_margin_y: u32,
    /// Space reserved for the slider panel beside the preview.
    pub preview_margin_x: u32,
    /// Space reserved above and below the histogram.
    pub histogram_margin_y: u32,
    /// JPEG quality of the full resolution export, 1-100.
    pub export_quality: u8,
    /// White point of a freshly loaded or reset image, 0-255.
    pub default_white_point: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_margin_y: 100,
            preview_margin_x: 622,
            histogram_margin_y: 111,
            export_quality: 100,
            default_white_point: DEFAULT_WHITE_POINT,
        }
    }
}

impl EditorConfig {
    /// Parameters a freshly loaded or reset image starts with.
    pub fn initial_params(&self) -> AdjustmentParameters {
        AdjustmentParameters {
            white_point: self.default_white_point,
            ..Default::default()
        }
    }

    /// Reject settings the editor cannot work with.
    pub fn validate(&self) -> Result<(), ToneError> {
        if !(1..=100).contains(&self.export_quality) {
            return Err(ToneError::InvalidParameter {
                name: "export_quality",
                value: self.export_quality as i64,
                min: 1,
                max: 100,
            });
        }
        if !(0..=255).contains(&self.default_white_point) {
            return Err(ToneError::InvalidParameter {
                name: "default_white_point",
                value: self.default_white_point as i64,
                min: 0,
                max: 255,
            });
        }
        Ok(())
    }

    /// Read a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ToneError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
