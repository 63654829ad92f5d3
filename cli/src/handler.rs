use driver::database::InMemoryDatabase;
use kernel::interface::query::DependOnNetworkQuery;
use kernel::interface::update::DependOnNetworkModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }

    #[cfg(test)]
    pub fn with_database(database: InMemoryDatabase) -> Self {
        Self(Arc::new(Handler { database }))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let database = InMemoryDatabase::new()?;

        Ok(Self { database })
    }
}

impl DependOnNetworkQuery for AppModule {
    type NetworkQuery = InMemoryDatabase;
    fn network_query(&self) -> &Self::NetworkQuery {
        self.database()
    }
}

impl DependOnNetworkModifier for AppModule {
    type NetworkModifier = InMemoryDatabase;
    fn network_modifier(&self) -> &Self::NetworkModifier {
        self.database()
    }
}
