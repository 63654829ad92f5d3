mod network;

pub use self::network::*;
