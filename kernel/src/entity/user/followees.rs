use serde::Serialize;

use crate::entity::{FolloweeCapacity, UserName};

/// Ordered, duplicate free list of followed names that never grows past its capacity.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Followees {
    names: Vec<UserName>,
    #[serde(skip)]
    capacity: FolloweeCapacity,
}

impl Followees {
    pub fn new(capacity: FolloweeCapacity) -> Self {
        Self {
            names: Vec::with_capacity(usize::from(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> FolloweeCapacity {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= usize::from(self.capacity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|followee| followee == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserName> {
        self.names.iter()
    }

    pub(crate) fn push(&mut self, name: UserName) -> bool {
        if self.is_full() || self.contains(name.as_str()) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Size of the intersection of both lists.
    pub fn intersection_count(&self, other: &Followees) -> usize {
        self.names
            .iter()
            .filter(|name| other.contains(name.as_str()))
            .count()
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{FolloweeCapacity, Followees, UserName};

    #[test]
    fn push_rejects_duplicates_and_overflow() {
        let mut followees = Followees::new(FolloweeCapacity::new(2));
        assert!(followees.push(UserName::new("Foo")));
        assert!(!followees.push(UserName::new("Foo")));
        assert!(followees.push(UserName::new("Bar")));
        assert!(followees.is_full());
        assert!(!followees.push(UserName::new("Baz")));
        assert_eq!(followees.len(), 2);
        assert!(!followees.contains("Baz"));
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut followees = Followees::new(FolloweeCapacity::new(0));
        assert!(followees.is_full());
        assert!(!followees.push(UserName::new("Foo")));
        assert!(followees.is_empty());
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut followees = Followees::new(FolloweeCapacity::default());
        assert!(followees.push(UserName::new("foo")));
        assert!(!followees.contains("Foo"));
        assert!(followees.push(UserName::new("Foo")));
    }

    #[test]
    fn intersection_count() {
        let mut left = Followees::new(FolloweeCapacity::default());
        let mut right = Followees::new(FolloweeCapacity::default());
        for name in ["a", "b", "c"] {
            left.push(UserName::new(name));
        }
        for name in ["c", "d", "a"] {
            right.push(UserName::new(name));
        }
        assert_eq!(left.intersection_count(&right), 2);
        assert_eq!(right.intersection_count(&left), 2);
    }
}
