use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tilescroll_engine::{Scroller, TileGridError, ViewConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::demo_map;

const CONFIG_ENV_VAR: &str = "TILESCROLL_CONFIG";
const FRAMES_ENV_VAR: &str = "TILESCROLL_FRAMES";
const DEFAULT_FRAME_COUNT: u32 = 600;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {message}")]
    ParseConfig { path: PathBuf, message: String },
    #[error("TILESCROLL_FRAMES must be a frame count, got {value:?}")]
    InvalidFrameCount { value: String },
    #[error("failed to build demo map: {0}")]
    DemoMap(#[from] TileGridError),
}

pub(crate) struct AppWiring {
    pub(crate) config: ViewConfig,
    pub(crate) scroller: Scroller,
    pub(crate) frame_count: u32,
}

pub(crate) fn build_app() -> Result<AppWiring, AppError> {
    init_tracing();
    info!("=== tilescroll startup ===");

    let config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_view_config(Path::new(&path))?,
        None => ViewConfig::default(),
    };
    let frame_count = parse_frame_count(std::env::var(FRAMES_ENV_VAR).ok())?;
    info!(
        viewport_width = config.viewport_width,
        viewport_height = config.viewport_height,
        camera_speed_px_per_second = config.camera_speed_px_per_second,
        max_frame_delta_seconds = ?config.max_frame_delta_seconds,
        bindings = config.bindings.len(),
        frame_count,
        "view_config"
    );

    let grid = demo_map::build_demo_grid()?;
    let scroller = Scroller::new(grid, &config);

    Ok(AppWiring {
        config,
        scroller,
        frame_count,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub(crate) fn load_view_config(path: &Path) -> Result<ViewConfig, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse_view_config(&raw).map_err(|message| AppError::ParseConfig {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_view_config(raw: &str) -> Result<ViewConfig, String> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, ViewConfig>(&mut deserializer).map_err(|error| {
        let path = error.path().to_string();
        let source = error.into_inner();
        if path.is_empty() || path == "." {
            format!("{source}")
        } else {
            format!("at {path}: {source}")
        }
    })
}

fn parse_frame_count(raw: Option<String>) -> Result<u32, AppError> {
    match raw {
        None => Ok(DEFAULT_FRAME_COUNT),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::InvalidFrameCount { value }),
    }
}
