//! Equirectangular environment maps: Radiance `.hdr` files decoded through
//! the `image` crate, with a procedural sky-gradient fallback when no map
//! is configured or loading fails.

use std::path::Path;

use anyhow::{Context, Result};

/// CPU-side equirectangular environment image, RGBA with linear float
/// components. Uploaded as Rgba16Float so the sampler stays filterable.
pub struct EnvironmentImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl EnvironmentImage {
    pub fn load_hdr(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("loading environment map {}", path.display()))?
            .into_rgb32f();
        let (width, height) = image.dimensions();

        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for pixel in image.pixels() {
            pixels.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 1.0]);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Sky gradient used when no map is available: sky blue overhead,
    /// washed out at the horizon, dim ground below.
    pub fn procedural_sky(width: u32, height: u32) -> Self {
        const ZENITH: [f32; 3] = [0.35, 0.58, 0.85];
        const HORIZON: [f32; 3] = [0.78, 0.84, 0.90];
        const GROUND: [f32; 3] = [0.22, 0.20, 0.18];

        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for y in 0..height {
            // 1 at the zenith, 0 at the horizon, -1 straight down.
            let elevation = 1.0 - 2.0 * ((y as f32 + 0.5) / height as f32);
            let color = if elevation >= 0.0 {
                lerp3(HORIZON, ZENITH, elevation)
            } else {
                lerp3(HORIZON, GROUND, (-elevation).sqrt())
            };
            for _ in 0..width {
                pixels.extend_from_slice(&[color[0], color[1], color[2], 1.0]);
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Upload as an Rgba16Float texture and return its view.
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
        let data: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&v| half::f16::from_f32(v).to_le_bytes())
            .collect();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Environment Map"),
            size: wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba16Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(8 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

/// Resolve the configured environment, falling back to the procedural sky
/// instead of failing the whole application.
pub fn resolve(path: Option<&Path>) -> EnvironmentImage {
    match path {
        Some(path) => match EnvironmentImage::load_hdr(path) {
            Ok(environment) => {
                log::info!(
                    "environment map loaded: {} ({}x{})",
                    path.display(),
                    environment.width,
                    environment.height
                );
                environment
            }
            Err(error) => {
                log::warn!("{error:#}; falling back to procedural sky");
                EnvironmentImage::procedural_sky(512, 256)
            }
        },
        None => EnvironmentImage::procedural_sky(512, 256),
    }
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedural_sky_has_expected_shape() {
        let sky = EnvironmentImage::procedural_sky(64, 32);

        assert_eq!(sky.pixels.len(), 64 * 32 * 4);

        // Top row is sky, bottom row is ground, alpha everywhere is 1.
        let top = &sky.pixels[0..3];
        let bottom_start = (64 * 31) * 4;
        let bottom = &sky.pixels[bottom_start..bottom_start + 3];
        assert!(top[2] > bottom[2], "zenith should be bluer than the ground");
        assert_eq!(sky.pixels[3], 1.0);
    }

    #[test]
    fn missing_hdr_falls_back_to_sky() {
        let environment = resolve(Some(Path::new("/definitely/not/here.hdr")));
        assert_eq!(environment.width, 512);
        assert_eq!(environment.height, 256);
    }
}
