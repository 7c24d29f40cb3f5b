use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following the XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/skiff)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// User command registry override
    pub commands_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Panics
    ///
    /// Panics if the system's project directories cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let project =
            ProjectDirs::from("", "", "skiff").expect("Failed to determine project directories");

        let config = project.config_dir().to_path_buf();

        Self {
            config_file: config.join("config.json"),
            commands_file: config.join("commands.json"),
            config,
        }
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            commands_file: base.join("commands.json"),
            config: base,
        }
    }

    /// Ensure the config directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}
