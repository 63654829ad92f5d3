mod capacity;
mod followees;
mod name;

pub use self::{capacity::*, followees::*, name::*};
use destructure::Destructure;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Destructure, References)]
pub struct User {
    name: UserName,
    followees: Followees,
}

impl User {
    pub fn new(name: UserName, capacity: FolloweeCapacity) -> Self {
        Self {
            name,
            followees: Followees::new(capacity),
        }
    }

    /// Appends `name` to the followees. Fails when the list is full or `name` is already followed.
    pub fn add_followee(&mut self, name: &str) -> bool {
        self.followees.push(UserName::new(name))
    }

    pub fn follows(&self, name: &str) -> bool {
        self.followees.contains(name)
    }

    pub fn followee_count(&self) -> usize {
        self.followees.len()
    }

    pub fn count_mutual(&self, other: &User) -> usize {
        self.followees.intersection_count(&other.followees)
    }

    /// Both users follow each other.
    pub fn is_friend_of(&self, other: &User) -> bool {
        self.follows(other.name.as_str()) && other.follows(self.name.as_str())
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ", self.name)?;
        for followee in self.followees.iter() {
            write!(f, "{} ", followee)?;
        }
        Ok(())
    }
}
