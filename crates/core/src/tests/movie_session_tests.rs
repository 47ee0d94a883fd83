// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{MovieSession, MovieSessionUpdate};
use time::macros::date;

use super::helpers::{FakeStore, show_time};
use crate::{
    ReferencedEntity, ServiceError, create_movie, create_movie_session,
    delete_movie_session_by_id, get_movie_session_by_id, list_movie_sessions,
    update_movie_session,
};

/// Returns a store holding one movie and one hall, plus their ids.
fn create_test_store() -> (FakeStore, i64, i64) {
    let mut store = FakeStore::new();
    let movie_id = create_movie(&mut store, "Heat", "", &[], &[]).unwrap().id();
    let hall_id = store.add_cinema_hall();
    (store, movie_id, hall_id)
}

fn only_session(store: &mut FakeStore) -> MovieSession {
    let sessions = list_movie_sessions(store, None).unwrap();
    assert_eq!(sessions.len(), 1);
    sessions[0].clone()
}

#[test]
fn test_create_movie_session_persists_row() {
    let (mut store, movie_id, hall_id) = create_test_store();

    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();

    let session = only_session(&mut store);
    assert_eq!(session.movie_id(), movie_id);
    assert_eq!(session.cinema_hall_id(), hall_id);
    assert_eq!(session.show_time(), show_time("2026-06-01 20:00:00"));
}

#[test]
fn test_create_movie_session_with_unknown_movie_fails() {
    let (mut store, _, hall_id) = create_test_store();

    let result = create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), 777, hall_id);

    assert_eq!(
        result.unwrap_err(),
        ServiceError::MissingReference {
            entity: ReferencedEntity::Movie,
            id: 777,
        }
    );
    assert_eq!(store.session_count(), 0);
}

#[test]
fn test_create_movie_session_with_unknown_hall_fails() {
    let (mut store, movie_id, _) = create_test_store();

    let result = create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, 555);

    assert_eq!(
        result.unwrap_err(),
        ServiceError::MissingReference {
            entity: ReferencedEntity::CinemaHall,
            id: 555,
        }
    );
}

#[test]
fn test_list_movie_sessions_by_date_ignores_time_of_day() {
    let (mut store, movie_id, hall_id) = create_test_store();
    for at in [
        "2026-06-01 00:00:00",
        "2026-06-01 23:59:59",
        "2026-06-02 00:00:00",
        "2026-05-31 23:59:59",
    ] {
        create_movie_session(&mut store, show_time(at), movie_id, hall_id).unwrap();
    }

    let on_day = list_movie_sessions(&mut store, Some(date!(2026 - 06 - 01))).unwrap();

    assert_eq!(on_day.len(), 2);
    assert!(
        on_day
            .iter()
            .all(|s| s.show_time().date() == date!(2026 - 06 - 01))
    );
    assert_eq!(list_movie_sessions(&mut store, None).unwrap().len(), 4);
}

#[test]
fn test_update_movie_session_changes_only_given_fields() {
    let (mut store, movie_id, hall_id) = create_test_store();
    let other_hall = store.add_cinema_hall();
    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();
    let session_id = only_session(&mut store).id();

    let updated = update_movie_session(
        &mut store,
        session_id,
        &MovieSessionUpdate {
            cinema_hall_id: Some(other_hall),
            ..MovieSessionUpdate::default()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(updated.cinema_hall_id(), other_hall);
    assert_eq!(updated.movie_id(), movie_id);
    assert_eq!(updated.show_time(), show_time("2026-06-01 20:00:00"));
    assert_eq!(
        get_movie_session_by_id(&mut store, session_id).unwrap(),
        Some(updated)
    );
    assert_eq!(store.saves, 1);
}

#[test]
fn test_update_movie_session_with_unknown_movie_leaves_row_unchanged() {
    let (mut store, movie_id, hall_id) = create_test_store();
    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();
    let before = only_session(&mut store);

    let result = update_movie_session(
        &mut store,
        before.id(),
        &MovieSessionUpdate {
            show_time: Some(show_time("2026-07-01 10:00:00")),
            movie_id: Some(4_040),
            cinema_hall_id: None,
        },
    );

    assert_eq!(
        result.unwrap_err(),
        ServiceError::MissingReference {
            entity: ReferencedEntity::Movie,
            id: 4_040,
        }
    );
    assert_eq!(store.saves, 0);
    assert_eq!(only_session(&mut store), before);
}

#[test]
fn test_update_movie_session_with_zero_movie_id_is_a_missing_reference() {
    let (mut store, movie_id, hall_id) = create_test_store();
    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();
    let before = only_session(&mut store);

    let result = update_movie_session(
        &mut store,
        before.id(),
        &MovieSessionUpdate {
            movie_id: Some(0),
            ..MovieSessionUpdate::default()
        },
    );

    assert_eq!(
        result.unwrap_err(),
        ServiceError::MissingReference {
            entity: ReferencedEntity::Movie,
            id: 0,
        }
    );
    assert_eq!(only_session(&mut store), before);
}

#[test]
fn test_empty_update_saves_session_unchanged() {
    let (mut store, movie_id, hall_id) = create_test_store();
    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();
    let before = only_session(&mut store);

    let updated = update_movie_session(&mut store, before.id(), &MovieSessionUpdate::default())
        .unwrap()
        .unwrap();

    assert_eq!(updated, before);
    assert_eq!(store.saves, 1);
}

#[test]
fn test_update_unknown_movie_session_returns_none() {
    let (mut store, movie_id, _) = create_test_store();

    let result = update_movie_session(
        &mut store,
        31_337,
        &MovieSessionUpdate {
            movie_id: Some(movie_id),
            ..MovieSessionUpdate::default()
        },
    )
    .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_get_unknown_movie_session_returns_none() {
    let (mut store, _, _) = create_test_store();

    assert!(get_movie_session_by_id(&mut store, 8).unwrap().is_none());
}

#[test]
fn test_delete_movie_session_reports_existence_once() {
    let (mut store, movie_id, hall_id) = create_test_store();
    create_movie_session(&mut store, show_time("2026-06-01 20:00:00"), movie_id, hall_id)
        .unwrap();
    let session_id = only_session(&mut store).id();

    assert!(delete_movie_session_by_id(&mut store, session_id).unwrap());
    assert!(!delete_movie_session_by_id(&mut store, session_id).unwrap());
    assert_eq!(store.session_count(), 0);
}
