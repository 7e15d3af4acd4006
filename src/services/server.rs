use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use super::loading::load_state;
use crate::config::AppConfig;
use crate::web::{create_router, AppState};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let load = load_state(&self.config);

        let state = Arc::new(AppState {
            load,
            config: self.config.clone(),
        });

        let app = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
