use car_rating_api::errors::RecordError;
use car_rating_api::modules::models::car::Car;
use car_rating_api::modules::models::general::{build_pool, run_migrations, DbPool};
use car_rating_api::modules::models::rate::Rate;
use tempfile::TempDir;

/// every test gets its own database file so they cannot see each other
fn fresh_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let database_url = dir.path().join("cars.db");
    let pool = build_pool(database_url.to_str().unwrap());

    let mut conn = pool.get().unwrap();
    run_migrations(&mut conn);

    (dir, pool)
}

#[test]
fn create_car_record() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let car = Car::create(conn, "Honda", "Civic").unwrap();

    assert_eq!(car.make, "Honda");
    assert_eq!(car.model, "Civic");
    assert_eq!(car.avg_rating, 0.0);
    assert_eq!(Car::get_all(conn).unwrap().len(), 1);
}

#[test]
fn create_car_record_rejects_duplicate_pair() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    Car::create(conn, "Honda", "Civic").unwrap();
    let error = Car::create(conn, "Honda", "Civic").unwrap_err();

    assert!(matches!(error, RecordError::AlreadyExists(_)));
    assert_eq!(Car::get_all(conn).unwrap().len(), 1);
}

#[test]
fn create_rate_record_without_car_fails() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let error = Rate::create(conn, 1, 5).unwrap_err();

    assert!(matches!(error, RecordError::NotFound(_)));
    assert!(Rate::get_all(conn).unwrap().is_empty());
}

#[test]
fn create_rate_record() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let car = Car::create(conn, "Honda", "Civic").unwrap();
    let rate = Rate::create(conn, car.id, 5).unwrap();

    assert_eq!(rate.car_id, car.id);
    assert_eq!(rate.rating, 5);
    assert_eq!(Rate::for_car(conn, car.id).unwrap().len(), 1);
}

#[test]
fn rate_inserts_update_the_running_average() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let car = Car::create(conn, "Honda", "Civic").unwrap();
    assert_eq!(car.avg_rating, 0.0);

    let expected = [(5, 5.0), (4, 4.5), (3, 4.0), (3, 3.75), (2, 3.4)];
    for (i, (rating, avg)) in expected.iter().enumerate() {
        Rate::create(conn, car.id, *rating).unwrap();

        assert_eq!(Rate::for_car(conn, car.id).unwrap().len(), i + 1);
        assert_eq!(Car::get_by_id(conn, car.id).unwrap().avg_rating, *avg);
    }
}

#[test]
fn deleting_a_car_cascades_to_its_rates() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let car = Car::create(conn, "Honda", "Civic").unwrap();
    Rate::create(conn, car.id, 5).unwrap();
    Rate::create(conn, car.id, 3).unwrap();

    Car::delete_by_id(conn, car.id).unwrap();

    assert!(Car::get_all(conn).unwrap().is_empty());
    assert!(Rate::for_car(conn, car.id).unwrap().is_empty());
    assert!(Rate::get_all(conn).unwrap().is_empty());
}

#[test]
fn deleting_a_missing_car_fails() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let error = Car::delete_by_id(conn, 42).unwrap_err();

    assert!(matches!(error, RecordError::NotFound(_)));
}

#[test]
fn popular_lists_only_rated_cars() {
    let (_dir, pool) = fresh_pool();
    let conn = &mut pool.get().unwrap();

    let rated = Car::create(conn, "Honda", "Civic").unwrap();
    let unrated = Car::create(conn, "Honda", "Accord").unwrap();
    Rate::create(conn, rated.id, 5).unwrap();
    Rate::create(conn, rated.id, 4).unwrap();

    let popular = Car::popular(conn).unwrap();

    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].id, rated.id);
    assert_eq!(popular[0].make, "Honda");
    assert_eq!(popular[0].model, "Civic");
    assert_eq!(popular[0].rating_count, 2);
    assert!(popular.iter().all(|row| row.id != unrated.id));
}
