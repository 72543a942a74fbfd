//! Server assembly and lifecycle.

use crate::app::{create_router, AppState};
use crate::error::{ServerError, ServerResult};
use atrium_config::{Config, ConfigCache};
use atrium_i18n::{TableLoader, TranslationTable, Translator};
use atrium_routing::LocaleRouting;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// The HTTP edge server.
pub struct AtriumServer {
    state: AppState,
}

impl AtriumServer {
    /// Loads the translation table named by `config` and builds the server.
    pub fn new(config: Config) -> ServerResult<Self> {
        let routing = LocaleRouting::from_config(&config)?;
        let table = TableLoader::new(&config.i18n.translations_dir).load(routing.resolver().locales())?;
        Ok(Self::with_table(config, routing, table))
    }

    /// Builds the server around an already loaded table.
    pub fn with_table(config: Config, routing: LocaleRouting, table: TranslationTable) -> Self {
        report_missing_keys(&routing, &table);
        Self {
            state: AppState {
                config: Arc::new(ConfigCache::new(config)),
                translator: Translator::new(table),
                routing,
            },
        }
    }

    /// Shared state handed to every handler.
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The application router.
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(&self) -> ServerResult<()> {
        let address = self.state.config.get().server.bind_address.clone();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;

        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Warn about keys the default locale has and other locales lack.
fn report_missing_keys(routing: &LocaleRouting, table: &TranslationTable) {
    let locales = routing.resolver().locales();
    let reference = locales.default_locale();

    for &locale in locales.supported() {
        if locale == reference {
            continue;
        }
        let missing = table.missing_keys(reference, locale);
        if !missing.is_empty() {
            warn!(
                locale = %locale,
                count = missing.len(),
                "Missing translations: {}",
                missing.join(", ")
            );
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
