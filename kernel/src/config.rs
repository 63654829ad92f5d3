use destructure::Destructure;
use std::time::Duration;
use vodca::References;

use crate::entity::{FolloweeCapacity, NetworkCapacity};

#[derive(Debug, Clone, References, Destructure)]
pub struct NetworkConfig {
    max_users: NetworkCapacity,
    max_followees: FolloweeCapacity,
    lock_timeout: Duration,
    getting_started: bool,
}

impl NetworkConfig {
    pub fn new(
        max_users: NetworkCapacity,
        max_followees: FolloweeCapacity,
        lock_timeout: Duration,
        getting_started: bool,
    ) -> Self {
        Self {
            max_users,
            max_followees,
            lock_timeout,
            getting_started,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_users: NetworkCapacity::default(),
            max_followees: FolloweeCapacity::default(),
            lock_timeout: Duration::from_secs(3),
            getting_started: false,
        }
    }
}
