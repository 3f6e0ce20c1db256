use consts::EARTH_RADIUS_KM;
use errors::InvalidArgument;
use models::{GeoPoint, Located, Nearby};

pub mod consts;
pub mod errors;
pub mod models;
#[cfg(test)]
mod tests;

/// Haversine great-circle distance between two points, in kilometers.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    // Rounding can push `a` just past 1 for antipodal points.
    let a = ((delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_KM * c
}

/// Keeps the candidates lying within `radius_km` of `origin` (boundary
/// included), nearest first. Candidates at equal distance keep their input
/// order. The count of matches is the length of the returned vector.
///
/// Candidates are cloned into the result; the caller's slice is untouched.
pub fn filter_by_radius<T>(
    origin: GeoPoint,
    candidates: &[T],
    radius_km: f64,
) -> Result<Vec<Nearby<T>>, InvalidArgument>
where
    T: Located + Clone,
{
    validate_radius(radius_km)?;
    let mut nearby = measure(origin, candidates)?;
    nearby.retain(|candidate| candidate.distance <= radius_km);
    sort_by_distance(&mut nearby);
    Ok(nearby)
}

/// Same as [`filter_by_radius`] without the radius cut.
pub fn rank_by_distance<T>(
    origin: GeoPoint,
    candidates: &[T],
) -> Result<Vec<Nearby<T>>, InvalidArgument>
where
    T: Located + Clone,
{
    let mut ranked = measure(origin, candidates)?;
    sort_by_distance(&mut ranked);
    Ok(ranked)
}

/// First candidate strictly closer to `origin` than `threshold_km`.
pub fn find_within<'a, T, I>(origin: GeoPoint, candidates: I, threshold_km: f64) -> Option<&'a T>
where
    T: Located + 'a,
    I: IntoIterator<Item = &'a T>,
{
    candidates
        .into_iter()
        .find(|candidate| distance_km(origin, candidate.position()) < threshold_km)
}

pub fn validate_radius(radius_km: f64) -> Result<(), InvalidArgument> {
    if radius_km.is_finite() && radius_km >= 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::Radius(radius_km))
    }
}

fn measure<T>(origin: GeoPoint, candidates: &[T]) -> Result<Vec<Nearby<T>>, InvalidArgument>
where
    T: Located + Clone,
{
    origin.validate()?;
    // Validate everything up front so a bad record never yields a partial result.
    for candidate in candidates {
        candidate.position().validate()?;
    }
    Ok(candidates
        .iter()
        .map(|candidate| Nearby {
            distance: distance_km(origin, candidate.position()),
            record: candidate.clone(),
        })
        .collect())
}

fn sort_by_distance<T>(nearby: &mut [Nearby<T>]) {
    // `sort_by` is stable, which is what keeps ties in input order.
    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}
