//! Offline asset pass: favicon variants and WebP copies of the gallery.
//!
//! Missing inputs are skipped with a warning and a failing file never stops
//! the batch; every outcome lands in the [`Report`].

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::ConvertError;

pub const FAVICON_SOURCE: &str = "favicon.jpg";
pub const GALLERY_DIR: &str = "1";
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// One square favicon output.
#[derive(Debug, Clone, Copy)]
pub struct IconTarget {
    pub file_name: &'static str,
    pub size: u32,
    pub format: ImageFormat,
}

pub const FAVICON_TARGETS: [IconTarget; 4] = [
    IconTarget {
        file_name: "favicon-32.png",
        size: 32,
        format: ImageFormat::Png,
    },
    IconTarget {
        file_name: "favicon-16.png",
        size: 16,
        format: ImageFormat::Png,
    },
    IconTarget {
        file_name: "favicon-192.webp",
        size: 192,
        format: ImageFormat::WebP,
    },
    IconTarget {
        file_name: "apple-touch-icon.png",
        size: 180,
        format: ImageFormat::Png,
    },
];

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub project_dir: PathBuf,
    pub gallery_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ConvertOptions {
    /// Gallery read from and written back to `<project>/1`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let gallery_dir = project_dir.join(GALLERY_DIR);
        Self {
            output_dir: gallery_dir.clone(),
            gallery_dir,
            project_dir,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub success: Vec<String>,
    pub failed: Vec<String>,
}

/// Run the whole batch. Errors only when the project directory is unusable.
pub fn run(opts: &ConvertOptions) -> Result<Report, ConvertError> {
    if !opts.project_dir.is_dir() {
        return Err(ConvertError::NotADirectory(opts.project_dir.clone()));
    }
    let mut report = Report::default();
    convert_favicon(opts, &mut report);
    convert_gallery(opts, &mut report);
    Ok(report)
}

fn convert_favicon(opts: &ConvertOptions, report: &mut Report) {
    let src = opts.project_dir.join(FAVICON_SOURCE);
    if !src.is_file() {
        log::warn!("{FAVICON_SOURCE} not found, skipping");
        return;
    }
    log::info!("processing {}", src.display());

    let result = open(&src).and_then(|img| {
        for target in &FAVICON_TARGETS {
            let icon = img.resize_to_fill(target.size, target.size, FilterType::Lanczos3);
            let out = opts.project_dir.join(target.file_name);
            save(&icon, &out, target.format)?;
            report
                .success
                .push(format!("{} ({s}x{s})", target.file_name, s = target.size));
        }
        Ok(())
    });

    match result {
        Ok(()) => log::info!("favicon done"),
        Err(e) => {
            log::error!("favicon failed: {e}");
            report.failed.push(FAVICON_SOURCE.to_string());
        }
    }
}

fn convert_gallery(opts: &ConvertOptions, report: &mut Report) {
    if !opts.gallery_dir.is_dir() {
        log::warn!("{} not found, skipping gallery", opts.gallery_dir.display());
        return;
    }
    let files = match gallery_images(&opts.gallery_dir) {
        Ok(files) => files,
        Err(e) => {
            log::error!("cannot list gallery: {e}");
            return;
        }
    };
    if files.is_empty() {
        log::warn!("no .jpg/.png images in {}", opts.gallery_dir.display());
        return;
    }
    log::info!("found {} images", files.len());

    if let Err(source) = fs::create_dir_all(&opts.output_dir) {
        log::error!("cannot create {}: {source}", opts.output_dir.display());
        report
            .failed
            .extend(files.iter().map(|f| display_name(opts, f)));
        return;
    }

    for input in &files {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let output = opts.output_dir.join(format!("{stem}.webp"));
        match to_webp(input, &output) {
            Ok((before, after)) => {
                log::info!(
                    "{} -> {} (saved {:.1}%)",
                    input.display(),
                    output.display(),
                    savings_percent(before, after)
                );
                report.success.push(display_name(opts, &output));
            }
            Err(e) => {
                log::error!("{e}");
                report.failed.push(display_name(opts, input));
            }
        }
    }
}

/// Convertible images directly inside `dir`, sorted by file name.
pub fn gallery_images(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let io_err = |source| ConvertError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_convertible(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn is_convertible(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

/// Re-encode `input` as WebP. Returns input and output sizes in bytes.
pub fn to_webp(input: &Path, output: &Path) -> Result<(u64, u64), ConvertError> {
    let img = open(input)?;
    save(&img, output, ImageFormat::WebP)?;
    Ok((file_len(input)?, file_len(output)?))
}

/// Percentage of bytes saved; negative when the output grew.
pub fn savings_percent(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (1.0 - after as f64 / before as f64) * 100.0
}

fn open(path: &Path) -> Result<DynamicImage, ConvertError> {
    image::open(path).map_err(|source| ConvertError::Image {
        path: path.to_path_buf(),
        source,
    })
}

fn save(img: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), ConvertError> {
    // the WebP encoder only takes 8-bit RGB(A)
    let img = match format {
        ImageFormat::WebP if img.color().has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        ImageFormat::WebP => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img.clone(),
    };
    img.save_with_format(path, format)
        .map_err(|source| ConvertError::Image {
            path: path.to_path_buf(),
            source,
        })
}

fn file_len(path: &Path) -> Result<u64, ConvertError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn display_name(opts: &ConvertOptions, path: &Path) -> String {
    path.strip_prefix(&opts.project_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
