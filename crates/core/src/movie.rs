// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{Actor, Genre, Movie, MovieFilter};
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::store::MovieRepository;

/// Lists movies matching `filter`.
///
/// An empty filter returns every movie. A movie matching several of the
/// requested genres or actors is returned once. No order is guaranteed.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_movies<S: MovieRepository>(
    store: &mut S,
    filter: &MovieFilter,
) -> Result<Vec<Movie>, ServiceError<S::Error>> {
    debug!(
        genre_ids = ?filter.genre_ids(),
        actor_ids = ?filter.actor_ids(),
        "Listing movies"
    );

    Ok(store.find_movies(filter)?)
}

/// Retrieves a movie by id.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
/// Returns `Ok(None)` if no movie has this id.
pub fn get_movie_by_id<S: MovieRepository>(
    store: &mut S,
    movie_id: i64,
) -> Result<Option<Movie>, ServiceError<S::Error>> {
    debug!("Looking up movie by ID: {}", movie_id);

    Ok(store.find_movie(movie_id)?)
}

/// Creates a movie and attaches the requested genres and actors.
///
/// Ids that match no genre or actor are skipped. Title and description are
/// stored as given. The row and all of its relations are written in one
/// transaction.
///
/// # Arguments
///
/// * `store` - The store to write to
/// * `title` - The movie title
/// * `description` - The movie description
/// * `genre_ids` - Genres to attach (may be empty)
/// * `actor_ids` - Actors to attach (may be empty)
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is persisted in that case.
pub fn create_movie<S: MovieRepository>(
    store: &mut S,
    title: &str,
    description: &str,
    genre_ids: &[i64],
    actor_ids: &[i64],
) -> Result<Movie, ServiceError<S::Error>> {
    store.atomically(|store: &mut S| -> Result<Movie, ServiceError<S::Error>> {
        let movie_id: i64 = store.insert_movie(title, description)?;

        let genres: Vec<Genre> = if genre_ids.is_empty() {
            Vec::new()
        } else {
            let found: Vec<Genre> = store.find_genres(genre_ids)?;
            let found_ids: Vec<i64> = found.iter().map(Genre::id).collect();
            log_skipped("genre", genre_ids, &found_ids);
            store.attach_genres(movie_id, &found_ids)?;
            found
        };

        let actors: Vec<Actor> = if actor_ids.is_empty() {
            Vec::new()
        } else {
            let found: Vec<Actor> = store.find_actors(actor_ids)?;
            let found_ids: Vec<i64> = found.iter().map(Actor::id).collect();
            log_skipped("actor", actor_ids, &found_ids);
            store.attach_actors(movie_id, &found_ids)?;
            found
        };

        info!(
            movie_id,
            genres = genres.len(),
            actors = actors.len(),
            "Movie created"
        );

        Ok(Movie::new(movie_id, title, description).with_relations(genres, actors))
    })
}

fn log_skipped(kind: &str, requested: &[i64], found: &[i64]) {
    let skipped: Vec<i64> = requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();
    if !skipped.is_empty() {
        debug!("Skipping unknown {} ids: {:?}", kind, skipped);
    }
}
