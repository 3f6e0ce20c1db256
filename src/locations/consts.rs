pub const DEFAULT_LOCATION_NAME: &str = "Food Pickup Point";
pub const DEFAULT_LOCATION_ADDRESS: &str = "Address not specified";
pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_ADDRESS_LENGTH: usize = 500;
pub const MIN_AUTOCOMPLETE_QUERY_LENGTH: usize = 2;
pub const MAX_AUTOCOMPLETE_SUGGESTIONS: usize = 10;
pub const SECONDS_PER_DAY: u64 = 86_400;
