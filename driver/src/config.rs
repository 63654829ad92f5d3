use std::str::FromStr;
use std::time::Duration;

use kernel::prelude::config::NetworkConfig;
use kernel::prelude::entity::{FolloweeCapacity, NetworkCapacity};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

const NETWORK_MAX_USERS: &str = "NETWORK_MAX_USERS";
const NETWORK_MAX_FOLLOWEES: &str = "NETWORK_MAX_FOLLOWEES";
const NETWORK_LOCK_TIMEOUT_MS: &str = "NETWORK_LOCK_TIMEOUT_MS";
const NETWORK_GETTING_STARTED: &str = "NETWORK_GETTING_STARTED";

/// Reads the network configuration from the environment (and `.env`), falling back to defaults.
pub fn load_config() -> error_stack::Result<NetworkConfig, KernelError> {
    let default = NetworkConfig::default();
    let max_users = parse(NETWORK_MAX_USERS, env(NETWORK_MAX_USERS))
        .convert_error()?
        .map(NetworkCapacity::new)
        .unwrap_or(*default.max_users());
    let max_followees = parse(NETWORK_MAX_FOLLOWEES, env(NETWORK_MAX_FOLLOWEES))
        .convert_error()?
        .map(FolloweeCapacity::new)
        .unwrap_or(*default.max_followees());
    let lock_timeout = parse(NETWORK_LOCK_TIMEOUT_MS, env(NETWORK_LOCK_TIMEOUT_MS))
        .convert_error()?
        .map(Duration::from_millis)
        .unwrap_or(*default.lock_timeout());
    let getting_started = parse(NETWORK_GETTING_STARTED, env(NETWORK_GETTING_STARTED))
        .convert_error()?
        .unwrap_or(*default.getting_started());

    tracing::debug!(
        max_users = usize::from(max_users),
        max_followees = usize::from(max_followees),
        lock_timeout_ms = lock_timeout.as_millis() as u64,
        getting_started,
        "loaded network config"
    );
    Ok(NetworkConfig::new(
        max_users,
        max_followees,
        lock_timeout,
        getting_started,
    ))
}

fn parse<T: FromStr>(
    key: &'static str,
    value: Result<Option<String>, DriverError>,
) -> Result<Option<T>, DriverError> {
    match value? {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(DriverError::Parse { key, value }),
        },
    }
}
