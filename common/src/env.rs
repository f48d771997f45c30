//! Helpers for reading application configuration from environment variables

use std::{env::VarError, str::FromStr};

use crate::error::{AmError, AmResult};

/// Read the environment variable `key`, failing if it is not set or is not valid unicode.
/// # Errors
/// This function will return an error if the variable cannot be read
pub fn required(key: &'static str) -> AmResult<String> {
    std::env::var(key).map_err(|source| AmError::EnvVar { key, source })
}

/// Read the environment variable `key`, falling back to `default` when the variable is not set.
/// # Errors
/// This function will return an error if the variable is set but is not valid unicode
pub fn optional(key: &'static str, default: &str) -> AmResult<String> {
    match std::env::var(key) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_owned()),
        Err(source) => Err(AmError::EnvVar { key, source }),
    }
}

/// Read and parse the environment variable `key`, falling back to `default` when the variable is
/// not set.
/// # Errors
/// This function will return an error if the variable is set but cannot be parsed into `T`
pub fn optional_parsed<T>(key: &'static str, default: T) -> AmResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|error: T::Err| AmError::InvalidConfig {
            key,
            reason: format!("Could not parse `{value}`. {error}"),
        }),
        Err(VarError::NotPresent) => Ok(default),
        Err(source) => Err(AmError::EnvVar { key, source }),
    }
}
