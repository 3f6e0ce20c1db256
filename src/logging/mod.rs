use crate::cli::Args;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(args: &Args) {
    let quickwit_logging_layer = QuickwitLoggingLayerBuilder::new(args.quickwit_url.clone())
        .marker_field("task")
        .map_marker_to_index("http_request", "http_requests")
        .map_marker_to_index("proximity_query", "proximity_queries")
        .map_marker_to_index("location_change", "location_changes")
        .with_batch_size(consts::DEFAULT_LOGGING_BATCH_SIZE)
        .build();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("foodmap_server=info"));
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
