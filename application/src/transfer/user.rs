use serde::Serialize;

use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct UserDto {
    pub name: String,
    pub followees: Vec<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser { name, followees } = value.into_destruct();
        Self {
            name: name.into(),
            followees: followees.iter().map(ToString::to_string).collect(),
        }
    }
}

pub struct GetUserDto {
    pub name: String,
}

pub struct CreateUserDto {
    pub name: String,
}

pub struct FollowUserDto {
    pub follower: String,
    pub followee: String,
}
