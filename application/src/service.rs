mod network;
mod user;

pub use self::{network::*, user::*};

#[cfg(test)]
mod test_module {
    use driver::database::InMemoryDatabase;
    use kernel::interface::query::DependOnNetworkQuery;
    use kernel::interface::update::DependOnNetworkModifier;

    pub struct TestModule(pub InMemoryDatabase);

    impl DependOnNetworkQuery for TestModule {
        type NetworkQuery = InMemoryDatabase;
        fn network_query(&self) -> &Self::NetworkQuery {
            &self.0
        }
    }

    impl DependOnNetworkModifier for TestModule {
        type NetworkModifier = InMemoryDatabase;
        fn network_modifier(&self) -> &Self::NetworkModifier {
            &self.0
        }
    }
}
