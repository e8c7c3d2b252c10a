use crate::core::io::traits::NetworkRequest;
use crate::core::models::job::{InputDialect, Job};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OBSERVED_SUFFIX: &str = "_obs";
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";
pub const DEFAULT_IMAGE_DIRECTORY: &str = "species";

const NETWORK_SUBDIRECTORY: &str = "chemkin";
const NETWORK_FILE_NAME: &str = "chem.inp";
const DICTIONARY_FILE_NAME: &str = "species_dictionary.txt";
const LEGACY_DICTIONARY_FILE_NAME: &str = "RMG_Dictionary.txt";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Options controlling one reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileConfig {
    /// Network file; defaults to `<job dir>/chemkin/chem.inp`.
    pub network_path: Option<PathBuf>,
    /// Species dictionary; the default depends on the job's input dialect.
    pub dictionary_path: Option<PathBuf>,
    pub generate_images: bool,
    pub use_original_names: bool,
    pub check_duplicates: bool,
    /// Marker appended to labels of synthesized observed species.
    pub observed_suffix: String,
    /// Image output directory; defaults to `<job dir>/species`.
    pub image_directory: Option<PathBuf>,
    pub image_extension: String,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            network_path: None,
            dictionary_path: None,
            generate_images: true,
            use_original_names: false,
            check_duplicates: true,
            observed_suffix: DEFAULT_OBSERVED_SUFFIX.to_string(),
            image_directory: None,
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

impl ReconcileConfig {
    /// Loads a configuration from a TOML file, filling unspecified keys with defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: FileReconcileConfig =
            toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(file.into_builder().build()?)
    }

    /// Resolves the network and dictionary locations for `job`.
    pub fn network_request(&self, job: &Job) -> NetworkRequest {
        let dir = job.working_directory();
        let network_path = self
            .network_path
            .clone()
            .unwrap_or_else(|| dir.join(NETWORK_SUBDIRECTORY).join(NETWORK_FILE_NAME));
        let dictionary_path = self.dictionary_path.clone().unwrap_or_else(|| match job.dialect {
            InputDialect::Native => dir.join(NETWORK_SUBDIRECTORY).join(DICTIONARY_FILE_NAME),
            InputDialect::Legacy => dir.join(LEGACY_DICTIONARY_FILE_NAME),
        });

        NetworkRequest {
            network_path,
            dictionary_path,
            use_original_names: self.use_original_names,
            check_duplicates: self.check_duplicates,
        }
    }

    /// Directory that receives species images for `job`.
    pub fn image_directory_for(&self, job: &Job) -> PathBuf {
        self.image_directory
            .clone()
            .unwrap_or_else(|| job.working_directory().join(DEFAULT_IMAGE_DIRECTORY))
    }
}

#[derive(Default)]
pub struct ReconcileConfigBuilder {
    network_path: Option<PathBuf>,
    dictionary_path: Option<PathBuf>,
    generate_images: Option<bool>,
    use_original_names: Option<bool>,
    check_duplicates: Option<bool>,
    observed_suffix: Option<String>,
    image_directory: Option<PathBuf>,
    image_extension: Option<String>,
}

impl ReconcileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network_path(mut self, path: PathBuf) -> Self {
        self.network_path = Some(path);
        self
    }
    pub fn dictionary_path(mut self, path: PathBuf) -> Self {
        self.dictionary_path = Some(path);
        self
    }
    pub fn generate_images(mut self, enabled: bool) -> Self {
        self.generate_images = Some(enabled);
        self
    }
    pub fn use_original_names(mut self, enabled: bool) -> Self {
        self.use_original_names = Some(enabled);
        self
    }
    pub fn check_duplicates(mut self, enabled: bool) -> Self {
        self.check_duplicates = Some(enabled);
        self
    }
    pub fn observed_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.observed_suffix = Some(suffix.into());
        self
    }
    pub fn image_directory(mut self, path: PathBuf) -> Self {
        self.image_directory = Some(path);
        self
    }
    pub fn image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extension = Some(extension.into());
        self
    }

    pub fn build(self) -> Result<ReconcileConfig, ConfigError> {
        let defaults = ReconcileConfig::default();

        let observed_suffix = self.observed_suffix.unwrap_or(defaults.observed_suffix);
        if observed_suffix.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "observed-suffix",
                reason: "must not be empty".to_string(),
            });
        }

        let image_extension = self.image_extension.unwrap_or(defaults.image_extension);
        if image_extension.is_empty()
            || image_extension
                .chars()
                .any(|c| !c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidParameter {
                name: "image-extension",
                reason: format!(
                    "'{}' must be a non-empty alphanumeric extension without a leading dot",
                    image_extension
                ),
            });
        }

        Ok(ReconcileConfig {
            network_path: self.network_path,
            dictionary_path: self.dictionary_path,
            generate_images: self.generate_images.unwrap_or(defaults.generate_images),
            use_original_names: self
                .use_original_names
                .unwrap_or(defaults.use_original_names),
            check_duplicates: self.check_duplicates.unwrap_or(defaults.check_duplicates),
            observed_suffix,
            image_directory: self.image_directory,
            image_extension,
        })
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileReconcileConfig {
    network_path: Option<PathBuf>,
    dictionary_path: Option<PathBuf>,
    generate_images: Option<bool>,
    use_original_names: Option<bool>,
    check_duplicates: Option<bool>,
    observed_suffix: Option<String>,
    image_directory: Option<PathBuf>,
    image_extension: Option<String>,
}

impl FileReconcileConfig {
    fn into_builder(self) -> ReconcileConfigBuilder {
        ReconcileConfigBuilder {
            network_path: self.network_path,
            dictionary_path: self.dictionary_path,
            generate_images: self.generate_images,
            use_original_names: self.use_original_names,
            check_duplicates: self.check_duplicates,
            observed_suffix: self.observed_suffix,
            image_directory: self.image_directory,
            image_extension: self.image_extension,
        }
    }
}
