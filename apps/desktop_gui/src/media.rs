//! Image asset resolution for `ImageRef`s.
//!
//! Assets are looked up as `<asset_dir>/<name>.png`. When no directory is
//! configured, or the file cannot be decoded, a round placeholder is drawn
//! instead so rendering never fails on a missing asset.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use eframe::egui;
use egui::TextureHandle;
use shared::domain::ImageRef;

/// Edge length of the generated placeholder.
pub const PLACEHOLDER_SIZE: u32 = 192;
/// Longest edge kept after decoding an asset from disk.
const MAX_ASSET_EDGE: u32 = 512;

const PLACEHOLDER_FILL: [u8; 4] = [0x3d, 0xdc, 0x84, 0xff];
const PLACEHOLDER_EYE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.rgba)
    }
}

pub fn resolve_image(image: ImageRef, asset_dir: Option<&Path>) -> DecodedImage {
    if let Some(dir) = asset_dir {
        let path = dir.join(image.file_name());
        match decode_image_file(&path) {
            Ok(decoded) => return decoded,
            Err(err) => tracing::warn!(
                path = %path.display(),
                "asset unavailable, drawing placeholder: {err}"
            ),
        }
    }
    render_placeholder(PLACEHOLDER_SIZE)
}

fn decode_image_file(path: &Path) -> Result<DecodedImage, String> {
    let dynamic = image::open(path).map_err(|err| err.to_string())?;
    let resized = dynamic.thumbnail(MAX_ASSET_EDGE, MAX_ASSET_EDGE).to_rgba8();
    Ok(DecodedImage {
        width: resized.width() as usize,
        height: resized.height() as usize,
        rgba: resized.into_raw(),
    })
}

/// Filled disc with two eyes on a transparent square.
pub fn render_placeholder(size: u32) -> DecodedImage {
    let size = size.max(1);
    let center = size as f32 / 2.0;
    let radius = center;
    let eye_radius = size as f32 * 0.06;
    let eye_y = size as f32 * 0.42;
    let eye_dx = size as f32 * 0.17;

    let image = image::RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let inside = |cx: f32, cy: f32, r: f32| (px - cx).powi(2) + (py - cy).powi(2) <= r * r;

        if inside(center - eye_dx, eye_y, eye_radius) || inside(center + eye_dx, eye_y, eye_radius)
        {
            image::Rgba(PLACEHOLDER_EYE)
        } else if inside(center, center, radius) {
            image::Rgba(PLACEHOLDER_FILL)
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });

    DecodedImage {
        width: size as usize,
        height: size as usize,
        rgba: image.into_raw(),
    }
}

/// One GPU texture per image reference, uploaded on first use.
#[derive(Default)]
pub struct TextureCache {
    asset_dir: Option<PathBuf>,
    textures: HashMap<ImageRef, TextureHandle>,
}

impl TextureCache {
    pub fn new(asset_dir: Option<PathBuf>) -> Self {
        Self {
            asset_dir,
            textures: HashMap::new(),
        }
    }

    pub fn loaded(&self) -> usize {
        self.textures.len()
    }

    pub fn get_or_load(&mut self, ctx: &egui::Context, image: ImageRef) -> TextureHandle {
        let asset_dir = self.asset_dir.as_deref();
        self.textures
            .entry(image)
            .or_insert_with(|| {
                let decoded = resolve_image(image, asset_dir);
                tracing::debug!(
                    asset = image.asset_name(),
                    width = decoded.width,
                    height = decoded.height,
                    "uploading image texture"
                );
                ctx.load_texture(
                    format!("asset:{}", image.asset_name()),
                    decoded.to_color_image(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}
