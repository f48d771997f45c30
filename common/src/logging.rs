use std::path::Path;

use crate::error::{AmError, AmResult};

/// Initialize the global logger from the log4rs yaml configuration found at `path`.
/// # Errors
/// This function will return an error if the file cannot be read, the configuration is invalid
/// or a logger has already been set for the process
pub fn init_logging<P: AsRef<Path>>(path: P) -> AmResult<()> {
    let path = path.as_ref();
    log4rs::init_file(path, Default::default()).map_err(|error| {
        AmError::Logging(format!("Could not load config file, {path:?}. {error}"))
    })?;
    log::info!("Logging initialized from {path:?}");
    Ok(())
}
