use crate::cli::Args;
use crate::storage::interface::ILocationStorage;
use crate::storage::locations::InMemoryLocationsStorage;

#[derive(Clone, Default)]
pub struct AppContext<LS: ILocationStorage> {
    pub locations: LS,
    pub settings: SearchSettings,
}

/// Tunables of proximity queries, taken from the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchSettings {
    pub default_radius_km: f64,
    pub duplicate_threshold_km: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: 5.0,
            duplicate_threshold_km: 0.05,
        }
    }
}

pub struct RequestContext {
    pub user_id: String,
}

impl RequestContext {
    /// Context of work the server does on its own, such as seeding at startup.
    pub fn system() -> Self {
        Self {
            user_id: String::from("system"),
        }
    }
}

pub fn init(args: &Args) -> AppContext<InMemoryLocationsStorage> {
    AppContext {
        locations: InMemoryLocationsStorage::default(),
        settings: SearchSettings {
            default_radius_km: args.default_radius_km,
            duplicate_threshold_km: args.duplicate_threshold_km,
        },
    }
}
