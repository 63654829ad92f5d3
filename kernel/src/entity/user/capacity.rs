use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

const DEFAULT_FOLLOWEE_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct FolloweeCapacity(usize);

impl FolloweeCapacity {
    pub fn new(capacity: usize) -> Self {
        Self(capacity)
    }
}

impl Default for FolloweeCapacity {
    fn default() -> Self {
        Self::new(DEFAULT_FOLLOWEE_CAPACITY)
    }
}
