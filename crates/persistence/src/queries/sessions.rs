// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie session queries.

use cinema_domain::{DayBounds, MovieSession, day_bounds};
use diesel::prelude::*;
use time::Date;
use tracing::debug;

use crate::data_models::MovieSessionRow;
use crate::diesel_schema::movie_sessions;
use crate::error::PersistenceError;

/// Lists movie sessions ordered by id, optionally limited to one calendar day.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored show time
/// cannot be parsed.
pub fn find_movie_sessions(
    conn: &mut SqliteConnection,
    date: Option<Date>,
) -> Result<Vec<MovieSession>, PersistenceError> {
    let mut query = movie_sessions::table
        .order(movie_sessions::movie_session_id.asc())
        .select(MovieSessionRow::as_select())
        .into_boxed();

    if let Some(date) = date {
        debug!("Listing movie sessions on {}", date);
        let bounds: DayBounds = day_bounds(date)?;
        query = query.filter(movie_sessions::show_time.ge(bounds.start));
        if let Some(end) = bounds.end {
            query = query.filter(movie_sessions::show_time.lt(end));
        }
    }

    let rows: Vec<MovieSessionRow> = query.load(conn)?;
    rows.into_iter().map(MovieSession::try_from).collect()
}

/// Retrieves a movie session by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_movie_session(
    conn: &mut SqliteConnection,
    movie_session_id: i64,
) -> Result<Option<MovieSession>, PersistenceError> {
    debug!("Looking up movie session by ID: {}", movie_session_id);

    let result: Result<MovieSessionRow, diesel::result::Error> = movie_sessions::table
        .filter(movie_sessions::movie_session_id.eq(movie_session_id))
        .select(MovieSessionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(MovieSession::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
