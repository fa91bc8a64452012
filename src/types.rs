use crate::{
    modules::dish::repository::{self, Dish, DishStore, SeedError},
    utils::id::{IdGenerator, UlidGenerator},
};
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

pub struct Context {
    pub app: AppContext,
    pub dishes: DishStore,
    pub ids: Arc<dyn IdGenerator>,
}

impl Context {
    pub fn new(app: AppContext, dishes: Vec<Dish>) -> Self {
        Self {
            app,
            dishes: DishStore::new(dishes),
            ids: Arc::new(UlidGenerator),
        }
    }

    pub fn with_id_generator(self, ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids, ..self }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// JSON array of dishes loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let seed_path = env::var("DISHES_SEED_PATH").ok().map(PathBuf::from);

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            store: StoreConfig { seed_path },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, SeedError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, SeedError> {
        let dishes = match self.store.seed_path {
            Some(path) => {
                let dishes = repository::load_seed(&path).await?;
                tracing::info!("Loaded {} seed dishes from {}", dishes.len(), path.display());
                dishes
            }
            None => vec![],
        };

        Ok(Context::new(
            AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            dishes,
        ))
    }
}
