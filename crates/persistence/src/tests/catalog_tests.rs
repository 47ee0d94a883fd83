// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_catalog, create_test_persistence};
use crate::error::PersistenceError;

#[test]
fn test_create_genre_returns_stored_row() {
    let mut persistence = create_test_persistence();

    let genre = persistence.create_genre("Drama").unwrap();

    assert_eq!(genre.name(), "Drama");
    assert_eq!(persistence.list_genres().unwrap(), vec![genre]);
}

#[test]
fn test_duplicate_genre_name_is_rejected() {
    let mut persistence = create_test_persistence();
    persistence.create_genre("Drama").unwrap();

    let result = persistence.create_genre("Drama");

    match result.unwrap_err() {
        PersistenceError::UniqueViolation(_) => {}
        other => panic!("Expected UniqueViolation, got: {other:?}"),
    }
    assert_eq!(persistence.list_genres().unwrap().len(), 1);
}

#[test]
fn test_list_actors_in_id_order() {
    let mut persistence = create_test_persistence();
    let catalog = create_test_catalog(&mut persistence);

    let actors = persistence.list_actors().unwrap();

    let ids: Vec<i64> = actors.iter().map(cinema_domain::Actor::id).collect();
    assert_eq!(ids, vec![catalog.pacino, catalog.de_niro]);
    assert_eq!(actors[1].full_name(), "Robert De Niro");
}

#[test]
fn test_get_cinema_hall_reports_capacity() {
    let mut persistence = create_test_persistence();
    let catalog = create_test_catalog(&mut persistence);

    let hall = persistence
        .get_cinema_hall(catalog.red_hall)
        .unwrap()
        .unwrap();

    assert_eq!(hall.name(), "Red");
    assert_eq!(hall.rows(), 8);
    assert_eq!(hall.seats_in_row(), 20);
    assert_eq!(hall.capacity(), 160);
}

#[test]
fn test_get_missing_cinema_hall_returns_none() {
    let mut persistence = create_test_persistence();

    assert!(persistence.get_cinema_hall(42).unwrap().is_none());
}

#[test]
fn test_list_cinema_halls() {
    let mut persistence = create_test_persistence();
    create_test_catalog(&mut persistence);

    let names: Vec<String> = persistence
        .list_cinema_halls()
        .unwrap()
        .iter()
        .map(|hall| hall.name().to_string())
        .collect();

    assert_eq!(names, vec!["Blue", "Red"]);
}
