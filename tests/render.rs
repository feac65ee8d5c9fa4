//! End-to-end: decode a file, render all presets, re-decode the outputs.

use image::{ImageFormat, Luma};
use postcrop::{SearchConfig, load_image, render_variants, variants};

/// Write a textured grayscale PNG into `dir` and return its path.
fn write_source(dir: &std::path::Path, width: u32, height: u32) -> std::path::PathBuf {
    let img = image::GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 5 + y * 17) % 256) as u8])
    });
    let path = dir.join("source.png");
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

#[test]
fn file_to_three_variants() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = write_source(dir.path(), 600, 400);

    let image = load_image(&source_path).unwrap();
    let rendered = render_variants(&image, &variants::ALL, &SearchConfig::default()).unwrap();

    assert_eq!(rendered.len(), 3);
    for (variant, preset) in rendered.iter().zip(&variants::ALL) {
        assert_eq!(variant.label, preset.label());
        assert!(variant.crop.contained_in(600, 400));

        // Outputs must decode to the exact preset dimensions.
        let out_path = dir.path().join(format!("{}.png", variant.label));
        std::fs::write(&out_path, &variant.png).unwrap();
        let decoded = image::open(&out_path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (preset.width, preset.height));
    }
}

#[test]
fn repeated_runs_choose_identical_crops() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = write_source(dir.path(), 500, 500);
    let config = SearchConfig::default();

    let first = {
        let image = load_image(&source_path).unwrap();
        render_variants(&image, &variants::ALL, &config).unwrap()
    };
    let second = {
        let image = load_image(&source_path).unwrap();
        render_variants(&image, &variants::ALL, &config).unwrap()
    };

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.crop, b.crop);
    }
}
