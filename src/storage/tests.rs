use crate::geo::models::GeoPoint;
use crate::locations::models::{LocationDetails, NewLocation};
use crate::storage::interface::{LocationRepo, LocationStatsRepo, TooClose};
use crate::storage::locations::InMemoryLocationsStorage;

fn new_location(name: &str, lat: f64, lng: f64) -> NewLocation {
    NewLocation {
        position: GeoPoint::new(lat, lng),
        name: name.to_string(),
        address: String::from("Somewhere"),
        details: LocationDetails::default(),
        is_active: true,
    }
}

#[tokio::test]
async fn test_ids_are_sequential_and_never_reused() {
    let storage = InMemoryLocationsStorage::default();

    let first = storage
        .insert_unless_near(new_location("first", 51.48, -3.18), 0.05)
        .await
        .unwrap();
    let second = storage
        .insert_unless_near(new_location("second", 51.50, -3.18), 0.05)
        .await
        .unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    assert!(storage.delete(second.id).await.is_some());
    let third = storage
        .insert_unless_near(new_location("third", 51.52, -3.18), 0.05)
        .await
        .unwrap();
    assert_eq!(third.id, 3);

    let names: Vec<_> = storage.all().await.into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["first", "third"]);
    assert_eq!(storage.count().await, 2);
}

#[tokio::test]
async fn test_refuses_points_too_close() {
    let storage = InMemoryLocationsStorage::default();
    let existing = storage
        .insert_unless_near(new_location("existing", 51.4816, -3.1791), 0.05)
        .await
        .unwrap();

    let refused = storage
        .insert_unless_near(new_location("neighbour", 51.4817, -3.1791), 0.05)
        .await;

    assert_eq!(
        refused,
        Err(TooClose {
            existing_id: existing.id
        })
    );
    assert_eq!(storage.count().await, 1);
}

#[tokio::test]
async fn test_concurrent_saves_of_one_point_store_it_once() {
    let storage = InMemoryLocationsStorage::default();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let storage = storage.clone();
            tokio::spawn(async move {
                storage
                    .insert_unless_near(new_location("same", 51.4816, -3.1791), 0.05)
                    .await
                    .is_ok()
            })
        })
        .collect();
    let mut stored = 0;
    for handle in handles {
        if handle.await.unwrap() {
            stored += 1;
        }
    }

    assert_eq!(stored, 1);
    assert_eq!(storage.count().await, 1);
}

#[tokio::test]
async fn test_delete_missing() {
    let storage = InMemoryLocationsStorage::default();
    assert!(storage.delete(42).await.is_none());
}
