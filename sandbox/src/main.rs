mod camera;
mod config;
mod log;
mod mesh;
mod renderer;

use std::{error::Error, result::Result};

use math::{
    transform::radians,
    types::{Matrix4, Quat, Vector3},
};

use camera::{Camera, OrbitCamera};
use config::SceneConfig;
use log::Logger;
use mesh::Mesh;
use renderer::RendererBackend;

fn translation(offset: Vector3) -> Matrix4 {
    Matrix4::new([
        [1.0, 0.0, 0.0, offset.x],
        [0.0, 1.0, 0.0, offset.y],
        [0.0, 0.0, 1.0, offset.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

fn run(config: &SceneConfig, logger: Logger) -> Result<(), Box<dyn Error>> {
    let mut renderer = RendererBackend::Headless.create(logger)?;
    let cube = renderer.load_mesh(&Mesh::cube(config.cube_size))?;
    let small_cube = renderer.load_mesh(&Mesh::cube(0.5 * config.cube_size))?;
    let mut camera = OrbitCamera::new(config);
    let spin_axis = Vector3::new(1.0, 1.0, 0.0);
    let mut orientation = Quat::unit();
    let mut model_rotation = 0.0;
    let (mut vertices, mut visible_vertices) = (0, 0);
    for _ in 0..config.frame_count {
        camera.update(config.frame_time);
        model_rotation += config.frame_time * config.rotation_speed;
        let spin = radians(config.frame_time * config.rotation_speed);
        orientation = Quat::axis_angle(spin_axis, spin) * orientation;

        renderer.begin_frame(&camera.get_matrices())?;
        let mut rotation_axis = config.rotation_axis;
        renderer.draw(
            cube,
            &Matrix4::rotation(model_rotation, &mut rotation_axis).transpose(),
        )?;
        renderer.draw(
            small_cube,
            &(translation(Vector3::new(0.0, 0.0, config.cube_size))
                * Matrix4::from_quat(&mut orientation))
            .transpose(),
        )?;
        let stats = renderer.end_frame()?;
        vertices += stats.vertices;
        visible_vertices += stats.visible_vertices;
    }
    logger.info(
        "sandbox",
        format!(
            "{} frames rendered, {}/{} vertices visible, camera at {:?}",
            config.frame_count,
            visible_vertices,
            vertices,
            camera.get_position().as_array()
        ),
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = SceneConfig::default();
    let logger = Logger::new(config.log_level);
    if let Err(error) = run(&config, logger) {
        logger.error("sandbox", &error);
        return Err(error);
    }
    Ok(())
}
