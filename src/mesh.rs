use glam::Vec3;

/// Vertex layout shared by every mesh in the scene.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side geometry; the renderer uploads it into vertex/index buffers.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Ground plane in the x-z plane facing +y. UVs are scaled so the
    /// checker texture repeats every 20 world units, the tiling the stock
    /// ground plane uses.
    pub fn plane(width: f32, depth: f32) -> Self {
        let hw = width * 0.5;
        let hd = depth * 0.5;
        let u = width / 20.0;
        let v = depth / 20.0;

        let normal = [0.0, 1.0, 0.0];
        let vertices = vec![
            Vertex { position: [-hw, 0.0, -hd], normal, uv: [0.0, 0.0] },
            Vertex { position: [hw, 0.0, -hd], normal, uv: [u, 0.0] },
            Vertex { position: [hw, 0.0, hd], normal, uv: [u, v] },
            Vertex { position: [-hw, 0.0, hd], normal, uv: [0.0, v] },
        ];
        let indices = vec![0, 2, 1, 0, 3, 2];

        Self { vertices, indices }
    }

    /// Axis-aligned box centered at the origin: 24 vertices so every face
    /// gets a flat normal and its own UVs.
    pub fn cuboid(size: Vec3) -> Self {
        // (normal, u axis, v axis) per face
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];

        let half = size * 0.5;
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u_axis, v_axis) in FACES {
            let n = Vec3::from_array(normal);
            let u = Vec3::from_array(u_axis);
            let v = Vec3::from_array(v_axis);
            let base = vertices.len() as u32;

            for (su, sv) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let position = ((n + u * su + v * sv) * half).to_array();
                vertices.push(Vertex {
                    position,
                    normal,
                    uv: [(su + 1.0) * 0.5, (sv + 1.0) * 0.5],
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }
}
