//! Application state shared by the CLI commands.

use std::path::Path;
use std::sync::Arc;

use eightspace_core::catalog::Catalog;
use eightspace_core::curator::CuratorAssistant;
use eightspace_core::navigator::Navigator;
use eightspace_infra::config::{load_gallery_config, resolve_data_dir};
use eightspace_infra::llm::provider_from_env;
use eightspace_types::config::GalleryConfig;

/// Loaded configuration plus the gallery catalog and navigator.
pub struct AppState {
    pub config: GalleryConfig,
    pub catalog: Arc<Catalog>,
    pub navigator: Navigator,
}

impl AppState {
    /// Resolve the data directory, load `config.toml` and build the catalog.
    ///
    /// Never fails: a missing or broken config falls back to defaults.
    pub async fn init(data_dir: Option<&Path>) -> Self {
        let data_dir = resolve_data_dir(data_dir);
        let config = load_gallery_config(&data_dir).await;
        let catalog = Arc::new(Catalog::eight_space());
        tracing::debug!(
            data_dir = %data_dir.display(),
            pieces = catalog.pieces().len(),
            model = %config.curator.model,
            "application state initialized"
        );

        Self {
            navigator: Navigator::new(Arc::clone(&catalog)),
            config,
            catalog,
        }
    }

    /// A fresh curator session wired to the configured model endpoint.
    pub fn curator(&self) -> CuratorAssistant {
        let curator = &self.config.curator;
        CuratorAssistant::new(provider_from_env(curator), curator.model.clone())
            .with_timeout(curator.request_timeout())
    }
}
