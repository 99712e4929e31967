// Dependency injection container - Wires adapters from the resolved configuration

use std::sync::Arc;

use crate::adapters::exec_ffmpeg::FFmpegAdapter;
use crate::adapters::probe_ffprobe::FFprobeAdapter;
use crate::app::transform_interactor::TransformInteractor;
use crate::config_initialization::AppConfig;
use crate::domain::commands::CommandBuilder;
use crate::ports::{ExecutePort, ProbePort};

/// Application container holding the production adapters
pub struct DefaultAppContainer {
    probe_adapter: Arc<dyn ProbePort>,
    exec_adapter: Arc<dyn ExecutePort>,
    builder: CommandBuilder,
}

impl DefaultAppContainer {
    /// Create container with ffprobe/ffmpeg adapters
    pub fn new(config: &AppConfig) -> Self {
        Self {
            probe_adapter: Arc::new(FFprobeAdapter::new(config.ffprobe_path.clone())),
            exec_adapter: Arc::new(FFmpegAdapter::new().with_timeout(config.timeout)),
            builder: CommandBuilder::new(config.ffmpeg_path.clone()).with_overwrite(config.overwrite),
        }
    }

    /// Get transform interactor
    pub fn transform_interactor(&self) -> TransformInteractor {
        TransformInteractor::new(
            self.probe_adapter.clone(),
            self.exec_adapter.clone(),
            self.builder.clone(),
        )
    }
}
