use crate::entity::{Network, NetworkCapacity, User, UserName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait NetworkQuery: Sync + Send + 'static {
    async fn user_count(&self) -> error_stack::Result<usize, KernelError>;
    async fn capacity(&self) -> error_stack::Result<NetworkCapacity, KernelError>;
    async fn find_user(&self, name: &UserName)
        -> error_stack::Result<Option<User>, KernelError>;
    async fn recommend_who_to_follow(
        &self,
        name: &UserName,
    ) -> error_stack::Result<Option<UserName>, KernelError>;
    async fn are_friends(
        &self,
        name1: &UserName,
        name2: &UserName,
    ) -> error_stack::Result<bool, KernelError>;
    async fn most_popular_user(&self) -> error_stack::Result<Option<UserName>, KernelError>;
    async fn render(&self) -> error_stack::Result<String, KernelError>;
    async fn snapshot(&self) -> error_stack::Result<Network, KernelError>;
}

pub trait DependOnNetworkQuery: Sync + Send + 'static {
    type NetworkQuery: NetworkQuery;
    fn network_query(&self) -> &Self::NetworkQuery;
}
