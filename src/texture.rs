//! Procedural checker textures for the ground plane: an RGBA diffuse
//! checker and a grayscale roughness checker, both uploaded with repeat
//! addressing and linear filtering.

/// Default edge length of the generated checker textures, in pixels.
pub const CHECKER_TEXTURE_SIZE: u32 = 512;

/// RGBA8 pixels alternating between two colors on a `checkers` x
/// `checkers` grid.
pub fn checker_pixels(size: u32, checkers: u32, color1: [f32; 3], color2: [f32; 3]) -> Vec<u8> {
    let cell = (size / checkers.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell) + (y / cell)) % 2 == 0;
            let color = if even { color1 } else { color2 };
            pixels.push(channel_to_byte(color[0]));
            pixels.push(channel_to_byte(color[1]));
            pixels.push(channel_to_byte(color[2]));
            pixels.push(255);
        }
    }

    pixels
}

/// Grayscale roughness checker; the shader reads the red channel and
/// multiplies it into the material roughness.
pub fn checker_roughness_pixels(size: u32, checkers: u32, rough1: f32, rough2: f32) -> Vec<u8> {
    let cell = (size / checkers.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let even = ((x / cell) + (y / cell)) % 2 == 0;
            let gray = channel_to_byte(if even { rough1 } else { rough2 });
            pixels.extend_from_slice(&[gray, gray, gray, 255]);
        }
    }

    pixels
}

fn channel_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Upload RGBA8 pixels as a square 2D texture and return its view. Color
/// maps go up as sRGB, data maps (roughness) as linear.
pub fn upload_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    size: u32,
    format: wgpu::TextureFormat,
    pixels: &[u8],
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
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
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * size),
            rows_per_image: Some(size),
        },
        wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Repeat-wrapped, linearly filtered sampler for the checker maps.
pub fn repeat_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Checker Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
