use kernel::interface::query::{DependOnNetworkQuery, NetworkQuery};
use kernel::interface::update::{DependOnNetworkModifier, NetworkModifier};
use kernel::prelude::entity::UserName;
use kernel::KernelError;

use crate::transfer::{CreateUserDto, FollowUserDto, GetUserDto, UserDto};

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnNetworkQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let name = UserName::new(dto.name);
        let user = self.network_query().find_user(&name).await?;
        if user.is_none() {
            tracing::debug!(%name, "user not found");
        }
        Ok(user.map(UserDto::from))
    }
}

impl<T> GetUserService for T where T: DependOnNetworkQuery {}

#[async_trait::async_trait]
pub trait AddUserService: 'static + Sync + Send + DependOnNetworkModifier {
    async fn add_user(&self, dto: CreateUserDto) -> error_stack::Result<bool, KernelError> {
        let name = UserName::new(dto.name);
        let added = NetworkModifier::add_user(self.network_modifier(), &name).await?;
        if added {
            tracing::debug!(%name, "user registered");
        } else {
            tracing::warn!(%name, "user rejected: network is full or the name is taken");
        }
        Ok(added)
    }
}

impl<T> AddUserService for T where T: DependOnNetworkModifier {}

#[async_trait::async_trait]
pub trait FollowUserService: 'static + Sync + Send + DependOnNetworkModifier {
    async fn follow_user(&self, dto: FollowUserDto) -> error_stack::Result<bool, KernelError> {
        let follower = UserName::new(dto.follower);
        let followee = UserName::new(dto.followee);
        // The rejection is decided under the same write lock as the follow itself.
        match self
            .network_modifier()
            .add_followee(&follower, &followee)
            .await?
        {
            Ok(()) => {
                tracing::debug!(%follower, %followee, "followee added");
                Ok(true)
            }
            Err(rejection) => {
                tracing::warn!(%follower, %followee, %rejection, "follow rejected");
                Ok(false)
            }
        }
    }
}

impl<T> FollowUserService for T where T: DependOnNetworkModifier {}
