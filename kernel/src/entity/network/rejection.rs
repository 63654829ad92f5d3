use std::fmt::{Display, Formatter};

/// Why a follow request left the network unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FollowRejection {
    FollowerNotFound,
    FolloweeNotFound,
    SelfFollow,
    CapacityOrDuplicate,
}

impl Display for FollowRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowRejection::FollowerNotFound => write!(f, "follower not found"),
            FollowRejection::FolloweeNotFound => write!(f, "followee not found"),
            FollowRejection::SelfFollow => write!(f, "users cannot follow themselves"),
            FollowRejection::CapacityOrDuplicate => {
                write!(f, "already followed or followee list is full")
            }
        }
    }
}
