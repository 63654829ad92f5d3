use crate::entity::{FollowRejection, UserName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait NetworkModifier: 'static + Sync + Send {
    async fn add_user(&self, name: &UserName) -> error_stack::Result<bool, KernelError>;
    async fn add_followee(
        &self,
        follower: &UserName,
        followee: &UserName,
    ) -> error_stack::Result<Result<(), FollowRejection>, KernelError>;
}

pub trait DependOnNetworkModifier: 'static + Sync + Send {
    type NetworkModifier: NetworkModifier;
    fn network_modifier(&self) -> &Self::NetworkModifier;
}
