use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config_cache::get_config_file;

pub type ConfigResult<T> = Result<T, Box<dyn Error>>;

/// Where a handler configuration should be loaded from. Factories take this
/// so callers can switch a whole chain between file-backed and built-in
/// defaults without touching the handler code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    File,
    Default,
}

pub trait ConfigProvider {
    fn provide<T>(&self) -> ConfigResult<T>
    where
        T: DeserializeOwned + Default;
}

/// Loads a JSON config file named `config_name` under `base_path`. File
/// contents go through the process-wide config cache, so repeated loads of
/// the same file do not hit the filesystem again.
pub struct FileConfigProvider {
    pub config_name: String,
    pub base_path: String,
}

impl ConfigProvider for FileConfigProvider {
    fn provide<T>(&self) -> ConfigResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let full_path = Path::new(&self.base_path).join(&self.config_name);
        let full_path = full_path.to_string_lossy();
        let contents = get_config_file(&full_path)?;
        if contents.trim().is_empty() {
            return Err(Box::new(LocalFileConfigError {
                path: self.base_path.clone(),
                filename: self.config_name.clone(),
                error_type: ErrorType::EmptyConfig,
            }));
        }
        match serde_json::from_str::<T>(&contents) {
            Ok(value) => Ok(value),
            Err(_) => Err(Box::new(LocalFileConfigError {
                path: self.base_path.clone(),
                filename: self.config_name.clone(),
                error_type: ErrorType::MalformedConfig,
            })),
        }
    }
}

/// Falls back to the type's `Default` impl. Used when no config directory is
/// present, mostly in tests and the in-repo demos.
pub struct DefaultConfigProvider;

impl ConfigProvider for DefaultConfigProvider {
    fn provide<T>(&self) -> ConfigResult<T>
    where
        T: DeserializeOwned + Default,
    {
        Ok(T::default())
    }
}

pub struct Config<T> {
    value: T,
}

impl<T> Config<T>
where
    T: DeserializeOwned + Default,
{
    pub fn new(provider: impl ConfigProvider) -> ConfigResult<Config<T>> {
        Ok(Self {
            value: provider.provide::<T>()?,
        })
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

#[derive(Debug)]
pub enum ErrorType {
    MalformedConfig,
    MissingConfig,
    EmptyConfig,
}

#[derive(Debug)]
pub struct LocalFileConfigError {
    pub(crate) path: String,
    pub(crate) filename: String,
    pub(crate) error_type: ErrorType,
}

impl LocalFileConfigError {
    pub(crate) fn missing(full_path: &str) -> Self {
        let (path, filename) = match full_path.rsplit_once('/') {
            Some((path, filename)) => (path.to_owned(), filename.to_owned()),
            None => (".".to_owned(), full_path.to_owned()),
        };
        Self {
            path,
            filename,
            error_type: ErrorType::MissingConfig,
        }
    }
}

impl Display for LocalFileConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            ErrorType::MalformedConfig => write!(
                f,
                "File {} under the path {} is malformed.",
                self.filename, self.path
            ),
            ErrorType::MissingConfig => write!(
                f,
                "File {} under the path {} cannot be found.",
                self.filename, self.path
            ),
            ErrorType::EmptyConfig => write!(
                f,
                "File {} under the path {} is either empty or not a file.",
                self.filename, self.path
            ),
        }
    }
}

impl Error for LocalFileConfigError {}
