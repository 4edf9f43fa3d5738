use std::path::PathBuf;

use argh::FromArgs;
use tonestag::codec::encode_png;
use tonestag::{AdjustmentParameters, Editor, EditorConfig, Viewport};

/// Adjust the tones of an image and export it as a full quality JPEG
#[derive(Debug, FromArgs)]
struct Args {
    /// image path
    #[argh(positional)]
    input: PathBuf,

    /// where to write the adjusted JPEG
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// where to write the histogram chart (PNG)
    #[argh(option)]
    histogram: Option<PathBuf>,

    /// where to write the histogram counts (JSON)
    #[argh(option)]
    histogram_json: Option<PathBuf>,

    /// JSON file with adjustment parameters
    #[argh(option, short = 'p')]
    params: Option<PathBuf>,

    /// JSON file with editor settings
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// viewport width used to size the preview
    #[argh(option, default = "1920")]
    viewport_width: u32,

    /// viewport height used to size the preview and the histogram
    #[argh(option, default = "1080")]
    viewport_height: u32,

    /// white point for binarize (0-255)
    #[argh(option, short = 'w')]
    white_point: Option<i32>,

    /// brightness offset
    #[argh(option, short = 'b')]
    brightness: Option<i32>,

    /// shadow offset
    #[argh(option)]
    shadow: Option<i32>,

    /// highlight offset
    #[argh(option)]
    highlight: Option<i32>,

    /// black point offset
    #[argh(option)]
    black: Option<i32>,

    /// binarize against the white point instead of applying curves
    #[argh(switch)]
    binarize: bool,

    /// convert to black and white
    #[argh(switch)]
    bw: bool,

    /// flip rows
    #[argh(switch)]
    flip_vertical: bool,

    /// flip columns
    #[argh(switch)]
    flip_horizontal: bool,

    /// print the histogram as lines of dots
    #[argh(switch)]
    dots: bool,
}

impl Args {
    fn adjustments(&self) -> Result<AdjustmentParameters, tonestag::ToneError> {
        let mut params = match &self.params {
            Some(path) => AdjustmentParameters::from_json_file(path)?,
            None => AdjustmentParameters::default(),
        };

        if let Some(v) = self.white_point {
            params.white_point = v;
        }
        if let Some(v) = self.brightness {
            params.brightness = v;
        }
        if let Some(v) = self.shadow {
            params.shadow = v;
        }
        if let Some(v) = self.highlight {
            params.highlight = v;
        }
        if let Some(v) = self.black {
            params.black = v;
        }
        params.binarize |= self.binarize;
        params.black_and_white |= self.bw;
        params.flip_vertical |= self.flip_vertical;
        params.flip_horizontal |= self.flip_horizontal;

        params.validate()?;
        Ok(params)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => EditorConfig::from_json_file(path)?,
        None => EditorConfig::default(),
    };
    let viewport = Viewport::new(args.viewport_width, args.viewport_height);

    let mut editor = Editor::open(&args.input, viewport, config)?;
    editor.set_params(args.adjustments()?)?;
    log::debug!("parameters: {:?}", editor.params());

    let rendered = editor.redraw()?;

    if args.dots {
        for line in rendered.histogram.dot_lines() {
            println!("{}", line);
        }
    }

    if let Some(path) = &args.histogram {
        std::fs::write(path, encode_png(rendered.chart.view())?)?;
        log::info!("wrote histogram to {}", path.display());
    }

    if let Some(path) = &args.histogram_json {
        std::fs::write(path, serde_json::to_vec_pretty(&rendered.histogram)?)?;
        log::info!("wrote histogram counts to {}", path.display());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("adjusted.jpg"));
    std::fs::write(&output, editor.export_jpeg()?)?;
    log::info!("wrote {}", output.display());

    Ok(())
}
