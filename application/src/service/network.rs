use kernel::interface::query::{DependOnNetworkQuery, NetworkQuery};
use kernel::prelude::entity::UserName;
use kernel::KernelError;

use crate::transfer::{FriendshipDto, NetworkDto, RecommendUserDto};

#[async_trait::async_trait]
pub trait RecommendUserService: 'static + Sync + Send + DependOnNetworkQuery {
    async fn recommend_who_to_follow(
        &self,
        dto: RecommendUserDto,
    ) -> error_stack::Result<Option<String>, KernelError> {
        let name = UserName::new(dto.name);
        let recommendation =
            NetworkQuery::recommend_who_to_follow(self.network_query(), &name).await?;
        match &recommendation {
            Some(recommended) => tracing::debug!(%name, %recommended, "recommendation found"),
            None => tracing::info!(%name, "no recommendation: unknown user or nobody left to follow"),
        }
        Ok(recommendation.map(String::from))
    }
}

impl<T> RecommendUserService for T where T: DependOnNetworkQuery {}

#[async_trait::async_trait]
pub trait FriendshipService: 'static + Sync + Send + DependOnNetworkQuery {
    async fn are_friends(&self, dto: FriendshipDto) -> error_stack::Result<bool, KernelError> {
        let name1 = UserName::new(dto.name1);
        let name2 = UserName::new(dto.name2);
        NetworkQuery::are_friends(self.network_query(), &name1, &name2).await
    }
}

impl<T> FriendshipService for T where T: DependOnNetworkQuery {}

#[async_trait::async_trait]
pub trait PopularUserService: 'static + Sync + Send + DependOnNetworkQuery {
    async fn most_popular_user(&self) -> error_stack::Result<Option<String>, KernelError> {
        let popular = NetworkQuery::most_popular_user(self.network_query()).await?;
        if popular.is_none() {
            tracing::info!("no popular user: network is empty");
        }
        Ok(popular.map(String::from))
    }
}

impl<T> PopularUserService for T where T: DependOnNetworkQuery {}

#[async_trait::async_trait]
pub trait RenderNetworkService: 'static + Sync + Send + DependOnNetworkQuery {
    async fn user_count(&self) -> error_stack::Result<usize, KernelError> {
        NetworkQuery::user_count(self.network_query()).await
    }

    async fn capacity(&self) -> error_stack::Result<usize, KernelError> {
        let capacity = NetworkQuery::capacity(self.network_query()).await?;
        Ok(capacity.into())
    }

    async fn render_network(&self) -> error_stack::Result<String, KernelError> {
        self.network_query().render().await
    }

    async fn network_snapshot(&self) -> error_stack::Result<NetworkDto, KernelError> {
        let network = self.network_query().snapshot().await?;
        Ok(NetworkDto::from(network))
    }
}

impl<T> RenderNetworkService for T where T: DependOnNetworkQuery {}
