use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

const DEFAULT_NETWORK_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct NetworkCapacity(usize);

impl NetworkCapacity {
    pub fn new(capacity: usize) -> Self {
        Self(capacity)
    }
}

impl Default for NetworkCapacity {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_CAPACITY)
    }
}
