use serde::Serialize;

use kernel::prelude::entity::Network;

use crate::transfer::UserDto;

#[derive(Debug, Clone, Serialize)]
pub struct NetworkDto {
    pub capacity: usize,
    pub users: Vec<UserDto>,
}

impl From<Network> for NetworkDto {
    fn from(value: Network) -> Self {
        Self {
            capacity: value.capacity().into(),
            users: value.users().cloned().map(UserDto::from).collect(),
        }
    }
}

pub struct RecommendUserDto {
    pub name: String,
}

pub struct FriendshipDto {
    pub name1: String,
    pub name2: String,
}
