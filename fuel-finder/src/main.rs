use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fuel_finder::cache::CachedDataset;
use fuel_finder::config::AppConfig;
use fuel_finder::dataset::DatasetClient;
use fuel_finder::geocoder::GeocoderClient;
use fuel_finder::index::{MemoryGeoIndex, MemoryRecordStore, load_stations};
use fuel_finder::search::{IndexSearch, ScanSearch, SearchBackend, SearchCoordinator, StrategyKind};
use fuel_finder::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "fuel_finder=info,tower_http=info";

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        std::process::exit(1);
    });

    if config.geocoder_app_id.is_empty() || config.geocoder_app_code.is_empty() {
        warn!("GEOCODER_APP_ID or GEOCODER_APP_CODE not set. Geocoding will likely fail.");
    }

    // Clients
    let geocoder =
        GeocoderClient::new(config.geocoder_config()).expect("Failed to create geocoder client");
    let dataset_client =
        DatasetClient::new(config.dataset_config()).expect("Failed to create dataset client");
    let dataset = Arc::new(CachedDataset::new(dataset_client, &config.cache_config()));

    // Index and record store
    let index = Arc::new(MemoryGeoIndex::new());
    let store = Arc::new(MemoryRecordStore::new());

    let search_config = config.search_config();
    let backend = match config.strategy {
        StrategyKind::Scan => {
            SearchBackend::Scan(ScanSearch::new(dataset.clone(), search_config.scan_chunk_size))
        }
        StrategyKind::Index => {
            SearchBackend::Index(IndexSearch::new(index.clone(), store.clone()))
        }
    };
    info!(strategy = %backend.kind(), "search strategy selected");

    if config.strategy == StrategyKind::Index && config.preload_index {
        match dataset.refresh().await {
            Ok(stations) => {
                load_stations(&stations, &index, &store).await;
            }
            Err(e) => warn!(error = %e, "failed to preload index, POST /setup to retry"),
        }
    }

    let coordinator = SearchCoordinator::new(geocoder, backend, search_config);
    let state = AppState::new(coordinator, dataset, index, store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.bind_addr, "Fuel station finder listening");
    info!("GET  /health   - Health check");
    info!("GET  /stations - Find stations near a ZIP code");
    info!("POST /setup    - Load the dataset into the index");

    axum::serve(listener, app).await.expect("Server error");
}
