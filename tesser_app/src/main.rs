//! Tesser demo driver
//!
//! Plays the role of the render driver: each frame it animates entity
//! transforms, recomputes the hierarchy, stages geometry and hands the
//! staged bytes to an upload sink.

mod scene_setup;

use std::path::PathBuf;

use thiserror::Error;
use tesser_engine::foundation::logging;
use tesser_engine::foundation::math::{constants::TAU, utils};
use tesser_engine::prelude::*;

/// Demo application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Scene setup error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Staging error
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Byte totals reported by the upload sink
#[derive(Debug, Default)]
struct UploadStats {
    frames: u32,
    vertex_bytes: usize,
    matrix_bytes: usize,
}

impl UploadStats {
    /// Stand-in for the graphics device upload
    fn upload(&mut self, stager: &GeometryStager) {
        self.frames += 1;
        self.vertex_bytes += stager.vertices().written_bytes().len();
        self.matrix_bytes += stager.matrices().written_bytes().len();
    }
}

fn load_config() -> Result<ApplicationConfig, AppError> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ApplicationConfig::load_from_file(&path)?,
        None => ApplicationConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(config: &ApplicationConfig) -> Result<UploadStats, AppError> {
    let mut registry = EntityRegistry::from_config(&config.scene)?;
    scene_setup::populate(&mut registry)?;

    let max_models = registry.entity_count();
    let mut stager = GeometryStager::new(config.buffer.max_vertices, max_models)?;
    let mut stats = UploadStats::default();
    let cube = registry.get("Cube").ok();

    for frame in 0..config.frames {
        #[allow(clippy::cast_precision_loss)]
        let angle = utils::wrap_angle(frame as f32 * TAU / 120.0);
        if let Some(cube) = cube {
            let entity = registry.entity_mut(cube)?;
            entity.set_rotation_zx(angle);
            entity.set_rotation_yx(angle * 0.5);
        }
        registry.compute_global_transforms();

        let vertices = stager.stage(&registry)?;
        log::trace!("Frame {}: {} vertices", frame, vertices);
        stats.upload(&stager);
    }

    Ok(stats)
}

fn main() -> Result<(), AppError> {
    let config = load_config()?;
    logging::init_with_filter(Some(config.engine.log_level.as_str()));
    log::info!("Running {} frames with {} entities", config.frames, config.scene.entities.len() + 1);

    let stats = run(&config)?;
    log::info!(
        "Uploaded {} frames: {} vertex bytes, {} matrix bytes",
        stats.frames,
        stats.vertex_bytes,
        stats.matrix_bytes
    );
    Ok(())
}
