use crate::geo::errors::InvalidArgument;
use crate::locations::responses::{LocationErrorCode, LocationErrorResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationsError {
    #[error("Invalid coordinates")]
    MissingCoordinates,
    #[error("Malformed location: {0}")]
    MalformedLocation(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("Name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("Address is longer than {max} characters")]
    AddressTooLong { max: usize },
    #[error("A location already exists very close to this point")]
    Duplicate { existing_id: u64 },
    #[error("No locations provided")]
    NoLocationsProvided,
    #[error("Location not found")]
    NotFound(u64),
}

impl LocationsError {
    pub fn error_code(&self) -> LocationErrorCode {
        match self {
            Self::MissingCoordinates
            | Self::InvalidArgument(InvalidArgument::Latitude(_))
            | Self::InvalidArgument(InvalidArgument::Longitude(_)) => {
                LocationErrorCode::InvalidCoordinates
            }
            Self::InvalidArgument(InvalidArgument::Radius(_)) => LocationErrorCode::InvalidRadius,
            Self::NameTooLong { .. } => LocationErrorCode::NameTooLong,
            Self::AddressTooLong { .. } => LocationErrorCode::AddressTooLong,
            Self::Duplicate { .. } => LocationErrorCode::DuplicateLocation,
            Self::MalformedLocation(_) => LocationErrorCode::MalformedLocation,
            Self::NoLocationsProvided => LocationErrorCode::NoLocationsProvided,
            Self::NotFound(_) => LocationErrorCode::LocationNotFound,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for LocationsError {
    fn into_response(self) -> Response {
        let body = LocationErrorResponse {
            error: true,
            error_code: self.error_code(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
