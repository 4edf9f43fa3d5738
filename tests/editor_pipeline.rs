use ndarray::Array3;
use tonestag::codec::{decode_files, decode_rgba, encode_png};
use tonestag::filters::core::{rgba_from_slice, rgba_into_vec};
use tonestag::filters::histogram::HISTOGRAM_BUCKETS;
use tonestag::{adjust, compute_histogram, AdjustmentParameters, Editor, EditorConfig, ToneError, Viewport};

fn noise_image(width: usize, height: usize, seed: u32) -> Array3<u8> {
    let mut state = seed;
    let mut img = Array3::<u8>::zeros((height, width, 4));
    for v in img.iter_mut() {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        *v = (state >> 16) as u8;
    }
    img
}

#[test]
fn single_pixel_binarize_scenarios() -> Result<(), ToneError> {
    let pixel = rgba_from_slice(&[100, 100, 100, 255], 1, 1)?;

    let keep = AdjustmentParameters { binarize: true, white_point: 180, ..Default::default() };
    assert_eq!(rgba_into_vec(adjust(pixel.view(), &keep)?), vec![100, 100, 100, 255]);

    let white = AdjustmentParameters { binarize: true, white_point: 50, ..Default::default() };
    assert_eq!(rgba_into_vec(adjust(pixel.view(), &white)?), vec![255, 255, 255, 255]);
    Ok(())
}

#[test]
fn histogram_counts_every_pixel() -> Result<(), ToneError> {
    for (width, height) in [(1, 1), (13, 7), (64, 3)] {
        let img = noise_image(width, height, (width * height) as u32);
        let hist = compute_histogram(img.view())?;
        assert_eq!(hist.total(), (width * height) as u64);
        assert_eq!(hist.counts().len(), HISTOGRAM_BUCKETS);
    }
    Ok(())
}

#[test]
fn flips_are_self_inverse_through_adjust() -> Result<(), ToneError> {
    let img = noise_image(9, 5, 7);
    for (v, h) in [(true, false), (false, true), (true, true)] {
        let params = AdjustmentParameters { flip_vertical: v, flip_horizontal: h, ..Default::default() };
        let once = adjust(img.view(), &params)?;
        assert_ne!(once, img);
        assert_eq!(adjust(once.view(), &params)?, img);
    }
    Ok(())
}

#[test]
fn editor_round_trip_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("input.png");
    let source = noise_image(40, 20, 3);
    std::fs::write(&path, encode_png(source.view())?)?;

    let config = EditorConfig {
        preview_margin_x: 0,
        preview_margin_y: 0,
        histogram_margin_y: 10,
        ..Default::default()
    };
    let mut editor = Editor::open(&path, Viewport::new(20, 20), config)?;
    assert_eq!(editor.source(), source.view());
    assert_eq!(editor.preview().dim(), (10, 20, 4));
    assert!(editor.params().is_default());

    editor.set_params(AdjustmentParameters {
        brightness: 15,
        shadow: -10,
        black_and_white: true,
        ..Default::default()
    })?;
    let rendered = editor.redraw()?;
    assert_eq!(rendered.image.dim(), (10, 20, 4));
    assert_eq!(rendered.histogram.total(), 200);
    assert_eq!(rendered.chart.dim(), (10, HISTOGRAM_BUCKETS, 4));
    for px in rendered.image.rows() {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    let exported = decode_rgba(&editor.export_jpeg()?)?;
    assert_eq!(exported.dim(), (20, 40, 4));
    Ok(())
}

#[test]
fn each_file_loads_independently() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut paths = Vec::new();
    for (i, size) in [4usize, 6, 8].iter().enumerate() {
        let path = dir.path().join(format!("{}.png", i));
        std::fs::write(&path, encode_png(noise_image(*size, *size, i as u32).view())?)?;
        paths.push(path);
    }
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"\x89PNG but not really")?;
    paths.insert(1, broken);

    let results = decode_files(&paths);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().map(|img| img.dim()).ok(), Some((4, 4, 4)));
    assert!(matches!(results[1], Err(ToneError::ImageDecodeError(_))));
    assert_eq!(results[2].as_ref().map(|img| img.dim()).ok(), Some((6, 6, 4)));
    assert_eq!(results[3].as_ref().map(|img| img.dim()).ok(), Some((8, 8, 4)));
    Ok(())
}
