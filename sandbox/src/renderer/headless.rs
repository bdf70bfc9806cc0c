use std::{
    error::Error,
    fmt::{Display, Formatter},
    mem::size_of,
};

use math::{
    types::{Matrix4, Vector4},
    MathError,
};

use super::Renderer;
use crate::{
    camera::CameraMatrices,
    log::Logger,
    mesh::{Mesh, MeshHandle, Vertex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererError {
    FrameNotStarted,
    FrameInProgress,
    InvalidMesh,
    InvalidMeshHandle(MeshHandle),
    Math(MathError),
}

impl Display for RendererError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RendererError::FrameNotStarted => write!(f, "No frame in progress"),
            RendererError::FrameInProgress => write!(f, "Previous frame not ended"),
            RendererError::InvalidMesh => write!(f, "Mesh index out of range"),
            RendererError::InvalidMeshHandle(handle) => {
                write!(f, "Invalid mesh handle: {}", handle.0)
            }
            RendererError::Math(error) => write!(f, "{}", error),
        }
    }
}

impl Error for RendererError {}

impl From<MathError> for RendererError {
    fn from(error: MathError) -> Self {
        RendererError::Math(error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frame: usize,
    pub draw_calls: usize,
    pub vertices: usize,
    pub visible_vertices: usize,
}

impl Display for FrameStats {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "frame {}: {} draw calls, {}/{} vertices visible",
            self.frame, self.draw_calls, self.visible_vertices, self.vertices
        )
    }
}

/// Runs the vertex stage on the CPU. Camera and model matrices go through
/// byte buffers and are read back the way a column-major shader reads them.
pub struct HeadlessRenderer {
    logger: Logger,
    uniform_buffer: Vec<u8>,
    push_constants: Vec<u8>,
    meshes: Vec<Box<[Vertex]>>,
    frame_count: usize,
    current_frame: Option<FrameStats>,
}

const SOURCE: &str = "headless";

fn is_visible(clip: Vector4) -> bool {
    clip.w > 0.0
        && clip.x.abs() <= clip.w
        && clip.y.abs() <= clip.w
        && (0.0..=clip.w).contains(&clip.z)
}

impl HeadlessRenderer {
    pub fn new(logger: Logger) -> Self {
        logger.info(SOURCE, "Renderer created");
        Self {
            logger,
            uniform_buffer: vec![0; size_of::<CameraMatrices>()],
            push_constants: vec![0; size_of::<Matrix4>()],
            meshes: Vec::new(),
            frame_count: 0,
            current_frame: None,
        }
    }

    pub fn camera_matrices(&self) -> Result<CameraMatrices, RendererError> {
        let (view, proj) = self.uniform_buffer.split_at(size_of::<Matrix4>());
        Ok(CameraMatrices {
            view: Matrix4::try_from_le_bytes(view)?,
            proj: Matrix4::try_from_le_bytes(proj)?,
        })
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self, camera: &CameraMatrices) -> Result<(), Box<dyn Error>> {
        if self.current_frame.is_some() {
            return Err(RendererError::FrameInProgress.into());
        }
        self.uniform_buffer.copy_from_slice(bytemuck::bytes_of(camera));
        self.current_frame = Some(FrameStats {
            frame: self.frame_count,
            ..Default::default()
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<FrameStats, Box<dyn Error>> {
        let stats = self
            .current_frame
            .take()
            .ok_or(RendererError::FrameNotStarted)?;
        self.frame_count += 1;
        self.logger.verbose(SOURCE, stats);
        Ok(stats)
    }

    fn load_mesh(&mut self, mesh: &Mesh) -> Result<MeshHandle, Box<dyn Error>> {
        let vertex_count = mesh.vertices.len();
        if mesh.indices.len() % 3 != 0
            || mesh
                .indices
                .iter()
                .any(|&index| index as usize >= vertex_count)
        {
            return Err(RendererError::InvalidMesh.into());
        }
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh.vertices.clone());
        self.logger.info(
            SOURCE,
            format!("Mesh {} loaded with {} vertices", handle.0, vertex_count),
        );
        Ok(handle)
    }

    fn draw(&mut self, mesh: MeshHandle, transform: &Matrix4) -> Result<(), Box<dyn Error>> {
        if self.current_frame.is_none() {
            return Err(RendererError::FrameNotStarted.into());
        }
        let vertices = self
            .meshes
            .get(mesh.0)
            .ok_or(RendererError::InvalidMeshHandle(mesh))?;
        self.push_constants.copy_from_slice(transform.as_bytes());
        let model = Matrix4::try_from_le_bytes(&self.push_constants)?;
        let CameraMatrices { view, proj } = self.camera_matrices()?;
        let (model, view, proj) = (model.transpose(), view.transpose(), proj.transpose());
        let visible = vertices
            .iter()
            .map(|vertex| proj * (view * (model * Vector4::point(vertex.pos))))
            .filter(|&clip| is_visible(clip))
            .count();
        if visible == 0 {
            self.logger
                .warning(SOURCE, format!("Mesh {} is entirely clipped", mesh.0));
        }
        if let Some(stats) = self.current_frame.as_mut() {
            stats.draw_calls += 1;
            stats.vertices += vertices.len();
            stats.visible_vertices += visible;
        }
        Ok(())
    }
}
