// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movie queries.
//!
//! Movie rows are loaded first and their genre and actor relations are
//! fetched in one query per relation table for the whole batch.

use std::collections::HashMap;

use cinema_domain::{Actor, Genre, Movie, MovieFilter};
use diesel::dsl::exists;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{ActorRow, GenreRow, MovieRow};
use crate::diesel_schema::{actors, genres, movies, movies_actors, movies_genres};
use crate::error::PersistenceError;

/// Lists movies matching `filter`, ordered by id.
///
/// A non-empty genre set keeps movies linked to at least one of the
/// genres; a non-empty actor set does the same for actors. When both
/// are given a movie must satisfy each. Every movie appears at most once.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_movies(
    conn: &mut SqliteConnection,
    filter: &MovieFilter,
) -> Result<Vec<Movie>, PersistenceError> {
    debug!(
        "Listing movies (genres: {:?}, actors: {:?})",
        filter.genre_ids(),
        filter.actor_ids()
    );

    let mut query = movies::table
        .order(movies::movie_id.asc())
        .select(MovieRow::as_select())
        .into_boxed();

    if !filter.genre_ids().is_empty() {
        let genre_ids: Vec<i64> = filter.genre_ids().iter().copied().collect();
        query = query.filter(
            movies::movie_id.eq_any(
                movies_genres::table
                    .filter(movies_genres::genre_id.eq_any(genre_ids))
                    .select(movies_genres::movie_id),
            ),
        );
    }

    if !filter.actor_ids().is_empty() {
        let actor_ids: Vec<i64> = filter.actor_ids().iter().copied().collect();
        query = query.filter(
            movies::movie_id.eq_any(
                movies_actors::table
                    .filter(movies_actors::actor_id.eq_any(actor_ids))
                    .select(movies_actors::movie_id),
            ),
        );
    }

    let rows: Vec<MovieRow> = query.load(conn)?;
    load_relations(conn, rows)
}

/// Retrieves a movie by ID together with its genres and actors.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the movie is not found.
pub fn get_movie(
    conn: &mut SqliteConnection,
    movie_id: i64,
) -> Result<Option<Movie>, PersistenceError> {
    debug!("Looking up movie by ID: {}", movie_id);

    let result: Result<MovieRow, diesel::result::Error> = movies::table
        .filter(movies::movie_id.eq(movie_id))
        .select(MovieRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(load_relations(conn, vec![row])?.into_iter().next()),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Checks whether a movie exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn movie_exists(conn: &mut SqliteConnection, movie_id: i64) -> Result<bool, PersistenceError> {
    Ok(diesel::select(exists(movies::table.filter(movies::movie_id.eq(movie_id)))).get_result(conn)?)
}

fn load_relations(
    conn: &mut SqliteConnection,
    rows: Vec<MovieRow>,
) -> Result<Vec<Movie>, PersistenceError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let movie_ids: Vec<i64> = rows.iter().map(|row| row.movie_id).collect();

    let genre_links: Vec<(i64, GenreRow)> = movies_genres::table
        .inner_join(genres::table)
        .filter(movies_genres::movie_id.eq_any(&movie_ids))
        .order(genres::genre_id.asc())
        .select((movies_genres::movie_id, GenreRow::as_select()))
        .load(conn)?;

    let actor_links: Vec<(i64, ActorRow)> = movies_actors::table
        .inner_join(actors::table)
        .filter(movies_actors::movie_id.eq_any(&movie_ids))
        .order(actors::actor_id.asc())
        .select((movies_actors::movie_id, ActorRow::as_select()))
        .load(conn)?;

    let mut genres_by_movie: HashMap<i64, Vec<Genre>> = HashMap::new();
    for (movie_id, row) in genre_links {
        genres_by_movie
            .entry(movie_id)
            .or_default()
            .push(Genre::from(row));
    }

    let mut actors_by_movie: HashMap<i64, Vec<Actor>> = HashMap::new();
    for (movie_id, row) in actor_links {
        actors_by_movie
            .entry(movie_id)
            .or_default()
            .push(Actor::from(row));
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let movie_id: i64 = row.movie_id;
            Movie::from(row).with_relations(
                genres_by_movie.remove(&movie_id).unwrap_or_default(),
                actors_by_movie.remove(&movie_id).unwrap_or_default(),
            )
        })
        .collect())
}
