use thiserror::Error;

/// Rejection of a proximity query before any distance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("latitude {0} is not a number within [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} is not a number within [-180, 180]")]
    Longitude(f64),
    #[error("radius {0} km is not a finite non-negative number")]
    Radius(f64),
}
