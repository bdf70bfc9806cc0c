mod headless;

use std::error::Error;

use math::types::Matrix4;

use crate::{
    camera::CameraMatrices,
    log::Logger,
    mesh::{Mesh, MeshHandle},
};

pub use headless::FrameStats;

pub trait Renderer {
    fn begin_frame(&mut self, camera: &CameraMatrices) -> Result<(), Box<dyn Error>>;
    fn end_frame(&mut self) -> Result<FrameStats, Box<dyn Error>>;
    fn load_mesh(&mut self, mesh: &Mesh) -> Result<MeshHandle, Box<dyn Error>>;
    /// `transform` is laid out for upload, like the camera matrices.
    fn draw(&mut self, mesh: MeshHandle, transform: &Matrix4) -> Result<(), Box<dyn Error>>;
}

pub enum RendererBackend {
    Headless,
}

impl RendererBackend {
    pub fn create(self, logger: Logger) -> Result<Box<dyn Renderer>, Box<dyn Error>> {
        let renderer = match self {
            RendererBackend::Headless => Box::new(headless::HeadlessRenderer::new(logger)),
        };
        Ok(renderer)
    }
}
