use bytemuck::{Pod, Zeroable};
use math::types::{Vector2, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(pub usize);

#[repr(C)]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
pub struct Vertex {
    pub pos: Vector3,
    pub norm: Vector3,
    pub uv: Vector2,
}

pub struct Mesh {
    pub vertices: Box<[Vertex]>,
    pub indices: Box<[u32]>,
}

struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    fn build(self) -> Mesh {
        let Self { vertices, indices } = self;
        Mesh {
            vertices: vertices.into_boxed_slice(),
            indices: indices.into_boxed_slice(),
        }
    }

    fn extend(mut self, mut value: Self) -> Self {
        let index_offset = self.vertices.len() as u32;
        for index in &mut value.indices {
            *index += index_offset;
        }
        self.indices.extend(&value.indices);
        self.vertices.extend(&value.vertices);
        self
    }

    /// Quad spanned by `u` and `v` around `center`, facing `u x v`.
    fn quad(center: Vector3, u: Vector3, v: Vector3) -> Self {
        let norm = u.cross(v).normalized();
        let corners = [
            (center - u - v, Vector2::new(0.0, 1.0)),
            (center + u - v, Vector2::new(1.0, 1.0)),
            (center + u + v, Vector2::new(1.0, 0.0)),
            (center - u + v, Vector2::new(0.0, 0.0)),
        ];
        Self {
            vertices: corners
                .into_iter()
                .map(|(pos, uv)| Vertex { pos, norm, uv })
                .collect(),
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }
}

impl Mesh {
    /// Axis aligned cube centered at the origin with outward facing,
    /// counter-clockwise wound faces.
    pub fn cube(side: f32) -> Self {
        // (normal, u, v) with u x v == normal
        const FACES: [(Vector3, Vector3, Vector3); 6] = [
            (
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ),
            (
                Vector3::new(-1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            (
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
            ),
            (
                Vector3::new(0.0, -1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ),
            (
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            (
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
            ),
        ];
        let half = 0.5 * side;
        FACES
            .iter()
            .map(|&(norm, u, v)| MeshBuilder::quad(half * norm, half * u, half * v))
            .fold(MeshBuilder::new(), MeshBuilder::extend)
            .build()
    }
}
