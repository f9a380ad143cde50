#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use landing_fx::convert::{self, ConvertOptions};
use landing_fx::error::ConvertError;

fn write_jpg(path: &Path, w: u32, h: u32) {
    RgbImage::from_fn(w, h, |x, y| Rgb([(x * 7) as u8, (y * 5) as u8, 120]))
        .save(path)
        .unwrap();
}

fn write_png(path: &Path, w: u32, h: u32) {
    RgbaImage::from_pixel(w, h, Rgba([200, 40, 90, 255]))
        .save(path)
        .unwrap();
}

#[test]
fn favicon_and_gallery_are_converted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_jpg(&root.join("favicon.jpg"), 64, 48);

    let gallery = root.join("1");
    fs::create_dir(&gallery).unwrap();
    write_jpg(&gallery.join("B.JPG"), 40, 30);
    write_png(&gallery.join("a.png"), 20, 20);
    fs::write(gallery.join("notes.txt"), "not an image").unwrap();

    let report = convert::run(&ConvertOptions::new(root)).unwrap();

    assert!(report.failed.is_empty(), "{:?}", report.failed);
    assert_eq!(
        report.success,
        vec![
            "favicon-32.png (32x32)",
            "favicon-16.png (16x16)",
            "favicon-192.webp (192x192)",
            "apple-touch-icon.png (180x180)",
            "1/B.webp",
            "1/a.webp",
        ]
    );

    let icon = image::open(root.join("apple-touch-icon.png")).unwrap();
    assert_eq!((icon.width(), icon.height()), (180, 180));
    let webp = image::open(gallery.join("B.webp")).unwrap();
    assert_eq!((webp.width(), webp.height()), (40, 30));
    assert!(!gallery.join("notes.webp").exists());
}

#[test]
fn broken_file_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = dir.path().join("1");
    fs::create_dir(&gallery).unwrap();
    fs::write(gallery.join("broken.png"), b"definitely not a png").unwrap();
    write_png(&gallery.join("ok.png"), 8, 8);

    let report = convert::run(&ConvertOptions::new(dir.path())).unwrap();

    assert_eq!(report.failed, vec!["1/broken.png"]);
    assert_eq!(report.success, vec!["1/ok.webp"]);
}

#[test]
fn missing_inputs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let report = convert::run(&ConvertOptions::new(dir.path())).unwrap();
    assert!(report.success.is_empty() && report.failed.is_empty());

    // gallery present but empty of images
    fs::create_dir(dir.path().join("1")).unwrap();
    let report = convert::run(&ConvertOptions::new(dir.path())).unwrap();
    assert!(report.success.is_empty() && report.failed.is_empty());
}

#[test]
fn separate_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = dir.path().join("1");
    fs::create_dir(&gallery).unwrap();
    write_jpg(&gallery.join("shot.jpeg"), 16, 16);

    let mut opts = ConvertOptions::new(dir.path());
    opts.output_dir = dir.path().join("out").join("webp");
    let report = convert::run(&opts).unwrap();

    assert_eq!(report.success, vec!["out/webp/shot.webp"]);
    assert!(opts.output_dir.join("shot.webp").is_file());
}

#[test]
fn unusable_project_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = convert::run(&ConvertOptions::new(&missing)).unwrap_err();
    assert!(matches!(err, ConvertError::NotADirectory(p) if p == missing));
}
