// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{MovieSession, MovieSessionUpdate, NewMovieSession};
use time::{Date, PrimitiveDateTime};
use tracing::{debug, info};

use crate::error::{ReferencedEntity, ServiceError};
use crate::store::MovieSessionRepository;

/// Fails with `MissingReference` unless every given id resolves.
fn ensure_references<S: MovieSessionRepository>(
    store: &mut S,
    movie_id: Option<i64>,
    cinema_hall_id: Option<i64>,
) -> Result<(), ServiceError<S::Error>> {
    if let Some(id) = movie_id
        && !store.movie_exists(id)?
    {
        return Err(ServiceError::MissingReference {
            entity: ReferencedEntity::Movie,
            id,
        });
    }

    if let Some(id) = cinema_hall_id
        && !store.cinema_hall_exists(id)?
    {
        return Err(ServiceError::MissingReference {
            entity: ReferencedEntity::CinemaHall,
            id,
        });
    }

    Ok(())
}

/// Schedules a movie in a cinema hall.
///
/// # Arguments
///
/// * `store` - The store to write to
/// * `show_time` - When the session starts
/// * `movie_id` - The movie being shown
/// * `cinema_hall_id` - The hall it is shown in
///
/// # Errors
///
/// Returns `MissingReference` if the movie or the cinema hall does not
/// exist, or a store error if the insert fails.
pub fn create_movie_session<S: MovieSessionRepository>(
    store: &mut S,
    show_time: PrimitiveDateTime,
    movie_id: i64,
    cinema_hall_id: i64,
) -> Result<(), ServiceError<S::Error>> {
    store.atomically(|store: &mut S| -> Result<(), ServiceError<S::Error>> {
        ensure_references(store, Some(movie_id), Some(cinema_hall_id))?;

        let session_id: i64 = store.insert_movie_session(&NewMovieSession {
            show_time,
            movie_id,
            cinema_hall_id,
        })?;

        info!(session_id, movie_id, cinema_hall_id, "Movie session created");
        Ok(())
    })
}

/// Lists movie sessions, optionally only those on one calendar day.
///
/// The time of day is ignored when `date` is given.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_movie_sessions<S: MovieSessionRepository>(
    store: &mut S,
    date: Option<Date>,
) -> Result<Vec<MovieSession>, ServiceError<S::Error>> {
    debug!(?date, "Listing movie sessions");

    Ok(store.find_movie_sessions(date)?)
}

/// Retrieves a movie session by id.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
/// Returns `Ok(None)` if the session does not exist.
pub fn get_movie_session_by_id<S: MovieSessionRepository>(
    store: &mut S,
    session_id: i64,
) -> Result<Option<MovieSession>, ServiceError<S::Error>> {
    debug!("Looking up movie session by ID: {}", session_id);

    Ok(store.find_movie_session(session_id)?)
}

/// Updates the fields of a movie session that are set in `update`.
///
/// New movie and cinema hall references are resolved before any field is
/// applied, and the result is saved once. A failed reference leaves the
/// stored session untouched.
///
/// # Errors
///
/// Returns `MissingReference` if a new movie or cinema hall does not exist,
/// or a store error if the lookup or save fails.
/// Returns `Ok(None)` if the session does not exist.
pub fn update_movie_session<S: MovieSessionRepository>(
    store: &mut S,
    session_id: i64,
    update: &MovieSessionUpdate,
) -> Result<Option<MovieSession>, ServiceError<S::Error>> {
    store.atomically(
        |store: &mut S| -> Result<Option<MovieSession>, ServiceError<S::Error>> {
            let Some(mut session) = store.find_movie_session(session_id)? else {
                debug!("Movie session {} not found for update", session_id);
                return Ok(None);
            };

            if update.is_empty() {
                debug!("Empty update for movie session {}", session_id);
            }

            ensure_references(store, update.movie_id, update.cinema_hall_id)?;

            session.apply(update);
            store.save_movie_session(&session)?;

            info!(session_id, "Movie session updated");
            Ok(Some(session))
        },
    )
}

/// Deletes a movie session.
///
/// # Errors
///
/// Returns an error if the delete fails.
/// Returns `Ok(false)` if the session did not exist.
pub fn delete_movie_session_by_id<S: MovieSessionRepository>(
    store: &mut S,
    session_id: i64,
) -> Result<bool, ServiceError<S::Error>> {
    let rows_affected: usize = store.delete_movie_session(session_id)?;

    if rows_affected == 0 {
        debug!("Movie session {} not found for delete", session_id);
        return Ok(false);
    }

    info!(session_id, "Movie session deleted");
    Ok(true)
}
