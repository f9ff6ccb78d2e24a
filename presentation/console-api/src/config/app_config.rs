use super::{
    cors_config, server_config::ServerConfig, session_config::SessionConfig,
    shopcart_api_config::ShopcartApiConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub shopcart_api: ShopcartApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            shopcart_api: ShopcartApiConfig::from_env()?,
            session: SessionConfig::from_env()?,
        })
    }
}
