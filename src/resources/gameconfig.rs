//! Engine configuration.
//!
//! Settings loaded from an INI file. Every value has a safe default, so a
//! missing file or key never prevents startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 800
//! height = 600
//! background = white
//! show_fps = true
//!
//! [window]
//! title = Synthia
//! target_fps = 60
//!
//! [motion]
//! elastic_firmness = 10
//! elastic_stretch = 0.1
//! time_scale = 1.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};
use crate::vector2::{DEFAULT_ELASTIC_FIRMNESS, DEFAULT_ELASTIC_STRETCH, ElasticParams};

const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 600;
const DEFAULT_BACKGROUND: &str = "white";
const DEFAULT_SHOW_FPS: bool = true;
const DEFAULT_TITLE: &str = "Synthia";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TIME_SCALE: f64 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Surface width in pixels.
    pub render_width: u32,
    /// Surface height in pixels.
    pub render_height: u32,
    /// Color the surface is cleared with each frame.
    pub background: String,
    /// Draw the FPS overlay in the default scene render hook.
    pub show_fps: bool,
    pub window_title: String,
    pub target_fps: u32,
    pub elastic_firmness: f64,
    pub elastic_stretch: f64,
    /// Multiplier applied to frame deltas.
    pub time_scale: f64,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
            show_fps: DEFAULT_SHOW_FPS,
            window_title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            elastic_firmness: DEFAULT_ELASTIC_FIRMNESS,
            elastic_stretch: DEFAULT_ELASTIC_STRETCH,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load `path`, falling back to defaults (with a warning) if it cannot
    /// be read.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::with_path(path);
        if let Err(e) = config.load_from_file() {
            log::warn!("{e}; using default configuration");
        }
        config
    }

    /// Load values from `config_path`. Missing keys keep their current value.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(|e| {
            EngineError::Config(format!(
                "failed to load config file {:?}: {e}",
                self.config_path
            ))
        })?;
        self.apply(&ini)?;
        info!(
            "Loaded config: {}x{} render, background={}, fps={}, show_fps={}",
            self.render_width, self.render_height, self.background, self.target_fps, self.show_fps
        );
        Ok(())
    }

    /// Load values from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| EngineError::Config(format!("failed to parse config: {e}")))?;
        self.apply(&ini)
    }

    fn apply(&mut self, ini: &Ini) -> Result<()> {
        // [render]
        if let Some(width) = ini.getuint("render", "width").map_err(config_err)? {
            self.render_width = to_u32("render.width", width)?;
        }
        if let Some(height) = ini.getuint("render", "height").map_err(config_err)? {
            self.render_height = to_u32("render.height", height)?;
        }
        if let Some(background) = ini.get("render", "background") {
            self.background = background;
        }
        if let Some(show_fps) = ini.getbool("render", "show_fps").map_err(config_err)? {
            self.show_fps = show_fps;
        }

        // [window]
        if let Some(title) = ini.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = ini.getuint("window", "target_fps").map_err(config_err)? {
            self.target_fps = to_u32("window.target_fps", fps)?;
        }

        // [motion]
        if let Some(firmness) = ini.getfloat("motion", "elastic_firmness").map_err(config_err)? {
            self.elastic_firmness = firmness;
        }
        if let Some(stretch) = ini.getfloat("motion", "elastic_stretch").map_err(config_err)? {
            if stretch <= 0.0 {
                return Err(EngineError::Config(format!(
                    "elastic_stretch must be positive, got {stretch}"
                )));
            }
            self.elastic_stretch = stretch;
        }
        if let Some(scale) = ini.getfloat("motion", "time_scale").map_err(config_err)? {
            self.time_scale = scale;
        }
        Ok(())
    }

    /// Write the configuration to `config_path`.
    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&self.config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut ini = Ini::new();

        ini.set("render", "width", Some(self.render_width.to_string()));
        ini.set("render", "height", Some(self.render_height.to_string()));
        ini.set("render", "background", Some(self.background.clone()));
        ini.set("render", "show_fps", Some(self.show_fps.to_string()));

        ini.set("window", "title", Some(self.window_title.clone()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));

        ini.set("motion", "elastic_firmness", Some(self.elastic_firmness.to_string()));
        ini.set("motion", "elastic_stretch", Some(self.elastic_stretch.to_string()));
        ini.set("motion", "time_scale", Some(self.time_scale.to_string()));

        ini.write(path)?;
        info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn elastic_params(&self) -> ElasticParams {
        ElasticParams {
            firmness: self.elastic_firmness,
            stretch: self.elastic_stretch,
        }
    }

    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }
}

fn config_err(message: String) -> EngineError {
    EngineError::Config(message)
}

fn to_u32(key: &str, value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| EngineError::Config(format!("{key} out of range: {value}")))
}
