mod network;
mod user;

pub use self::{network::*, user::*};
