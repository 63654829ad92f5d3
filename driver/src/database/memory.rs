use std::sync::Arc;
use std::time::Duration;

use error_stack::ResultExt;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::interface::query::NetworkQuery;
use kernel::interface::update::NetworkModifier;
use kernel::prelude::config::NetworkConfig;
use kernel::prelude::entity::{FollowRejection, Network, NetworkCapacity, User, UserName};
use kernel::KernelError;

use crate::config::load_config;
use crate::error::ConvertError;

/// Process local network store. Mutations take the write lock, queries share the read lock.
#[derive(Clone)]
pub struct InMemoryDatabase {
    network: Arc<RwLock<Network>>,
    lock_timeout: Duration,
}

impl InMemoryDatabase {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let config = load_config()?;
        Ok(Self::with_config(&config))
    }

    pub fn with_config(config: &NetworkConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(Network::from_config(config))),
            lock_timeout: *config.lock_timeout(),
        }
    }

    async fn read(&self) -> error_stack::Result<RwLockReadGuard<'_, Network>, KernelError> {
        tokio::time::timeout(self.lock_timeout, self.network.read())
            .await
            .convert_error()
            .attach_printable_lazy(|| "Failed to acquire network read lock")
    }

    async fn write(&self) -> error_stack::Result<RwLockWriteGuard<'_, Network>, KernelError> {
        tokio::time::timeout(self.lock_timeout, self.network.write())
            .await
            .convert_error()
            .attach_printable_lazy(|| "Failed to acquire network write lock")
    }
}

#[async_trait::async_trait]
impl NetworkQuery for InMemoryDatabase {
    async fn user_count(&self) -> error_stack::Result<usize, KernelError> {
        Ok(self.read().await?.user_count())
    }

    async fn capacity(&self) -> error_stack::Result<NetworkCapacity, KernelError> {
        Ok(self.read().await?.capacity())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    async fn find_user(
        &self,
        name: &UserName,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self.read().await?.get_user(name.as_str()).cloned())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn recommend_who_to_follow(
        &self,
        name: &UserName,
    ) -> error_stack::Result<Option<UserName>, KernelError> {
        let network = self.read().await?;
        Ok(network.recommend_who_to_follow(name.as_str()).cloned())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    async fn are_friends(
        &self,
        name1: &UserName,
        name2: &UserName,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(self.read().await?.are_friends(name1.as_str(), name2.as_str()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn most_popular_user(&self) -> error_stack::Result<Option<UserName>, KernelError> {
        let network = self.read().await?;
        Ok(network.most_popular_user().cloned())
    }

    async fn render(&self) -> error_stack::Result<String, KernelError> {
        Ok(self.read().await?.to_string())
    }

    async fn snapshot(&self) -> error_stack::Result<Network, KernelError> {
        Ok(self.read().await?.clone())
    }
}

#[async_trait::async_trait]
impl NetworkModifier for InMemoryDatabase {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn add_user(&self, name: &UserName) -> error_stack::Result<bool, KernelError> {
        Ok(self.write().await?.add_user(name.as_str()))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn add_followee(
        &self,
        follower: &UserName,
        followee: &UserName,
    ) -> error_stack::Result<Result<(), FollowRejection>, KernelError> {
        Ok(self
            .write()
            .await?
            .try_add_followee(follower.as_str(), followee.as_str()))
    }
}
