use driver::config::ServerConfig;
use driver::database::InMemoryDatabase;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(config: &ServerConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config)?)))
    }

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
    pub fn init(config: &ServerConfig) -> error_stack::Result<Self, KernelError> {
        let database = if config.seed_catalog() {
            InMemoryDatabase::seeded()?
        } else {
            InMemoryDatabase::new()
        };

        Ok(Self { database })
    }
}
