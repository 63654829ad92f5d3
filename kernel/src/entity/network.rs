mod capacity;
mod rejection;

pub use self::{capacity::*, rejection::*};
use crate::config::NetworkConfig;
use crate::entity::{FolloweeCapacity, User, UserName};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const GETTING_STARTED_USERS: [&str; 3] = ["Foo", "Bar", "Baz"];

/// Bounded follow graph. Users are kept in registration order, which decides every tie.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Network {
    users: Vec<User>,
    #[serde(skip)]
    capacity: NetworkCapacity,
    #[serde(skip)]
    followee_capacity: FolloweeCapacity,
}

impl Network {
    pub fn new(capacity: NetworkCapacity) -> Self {
        Self::with_followee_capacity(capacity, FolloweeCapacity::default())
    }

    pub fn with_followee_capacity(
        capacity: NetworkCapacity,
        followee_capacity: FolloweeCapacity,
    ) -> Self {
        Self {
            users: Vec::with_capacity(usize::from(capacity)),
            capacity,
            followee_capacity,
        }
    }

    /// Network pre-populated with Foo, Bar and Baz, as far as the capacity allows.
    pub fn getting_started(capacity: NetworkCapacity) -> Self {
        let mut network = Self::new(capacity);
        network.register_getting_started_users();
        network
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        let mut network = Self::with_followee_capacity(*config.max_users(), *config.max_followees());
        if *config.getting_started() {
            network.register_getting_started_users();
        }
        network
    }

    fn register_getting_started_users(&mut self) {
        for name in GETTING_STARTED_USERS {
            self.add_user(name);
        }
    }

    pub fn capacity(&self) -> NetworkCapacity {
        self.capacity
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn is_full(&self) -> bool {
        self.users.len() >= usize::from(self.capacity)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name() == name)
    }

    fn get_user_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.name() == name)
    }

    pub fn add_user(&mut self, name: &str) -> bool {
        if self.is_full() || self.get_user(name).is_some() {
            return false;
        }
        self.users
            .push(User::new(UserName::new(name), self.followee_capacity));
        true
    }

    /// Makes `follower` follow `followee`. Both must be registered and distinct.
    pub fn add_followee(&mut self, follower: &str, followee: &str) -> bool {
        self.try_add_followee(follower, followee).is_ok()
    }

    /// Same as [`Network::add_followee`], reporting the reason of a rejection.
    pub fn try_add_followee(
        &mut self,
        follower: &str,
        followee: &str,
    ) -> Result<(), FollowRejection> {
        if self.get_user(follower).is_none() {
            return Err(FollowRejection::FollowerNotFound);
        }
        if self.get_user(followee).is_none() {
            return Err(FollowRejection::FolloweeNotFound);
        }
        if follower == followee {
            return Err(FollowRejection::SelfFollow);
        }
        let user = self
            .get_user_mut(follower)
            .ok_or(FollowRejection::FollowerNotFound)?;
        if user.add_followee(followee) {
            Ok(())
        } else {
            Err(FollowRejection::CapacityOrDuplicate)
        }
    }

    /// Both users are registered and follow each other.
    pub fn are_friends(&self, name1: &str, name2: &str) -> bool {
        match (self.get_user(name1), self.get_user(name2)) {
            (Some(user1), Some(user2)) => user1.is_friend_of(user2),
            _ => false,
        }
    }

    /// The not yet followed user sharing the most followees with `name`.
    /// The earliest registered candidate wins a tie.
    pub fn recommend_who_to_follow(&self, name: &str) -> Option<&UserName> {
        let user = self.get_user(name)?;
        let mut recommendation: Option<(usize, &UserName)> = None;
        for candidate in self.users.iter() {
            if candidate.name() == user.name() || user.follows(candidate.name().as_str()) {
                continue;
            }
            let mutual = user.count_mutual(candidate);
            if recommendation.map_or(true, |(max, _)| mutual > max) {
                recommendation = Some((mutual, candidate.name()));
            }
        }
        recommendation.map(|(_, name)| name)
    }

    /// The user with the highest in-degree. The earliest registered user wins a tie.
    pub fn most_popular_user(&self) -> Option<&UserName> {
        let mut most_popular: Option<(usize, &UserName)> = None;
        for candidate in self.users.iter() {
            let count = self.followee_count(candidate.name().as_str());
            if most_popular.map_or(true, |(max, _)| count > max) {
                most_popular = Some((count, candidate.name()));
            }
        }
        most_popular.map(|(_, name)| name)
    }

    // In-degree of `name`, counting other users only.
    fn followee_count(&self, name: &str) -> usize {
        self.users
            .iter()
            .filter(|user| user.name() != name && user.follows(name))
            .count()
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Network:")?;
        for user in self.users.iter() {
            write!(f, "\n{}", user)?;
        }
        Ok(())
    }
}
