// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, CinemaHall, Genre, Movie, MovieFilter, MovieSession, MovieSessionUpdate};
use time::macros::datetime;

fn create_test_movie() -> Movie {
    Movie::new(1, "Arrival", "Linguist meets heptapods").with_relations(
        vec![Genre::new(10, "Drama"), Genre::new(11, "Sci-Fi")],
        vec![Actor::new(20, "Amy", "Adams")],
    )
}

#[test]
fn test_actor_full_name() {
    let actor: Actor = Actor::new(1, "Jeremy", "Renner");
    assert_eq!(actor.full_name(), "Jeremy Renner");
}

#[test]
fn test_cinema_hall_capacity() {
    let hall: CinemaHall = CinemaHall::new(1, "Blue", 12, 18);
    assert_eq!(hall.capacity(), 216);
}

#[test]
fn test_movie_relation_ids() {
    let movie: Movie = create_test_movie();
    assert_eq!(movie.genre_ids().into_iter().collect::<Vec<_>>(), vec![10, 11]);
    assert_eq!(movie.actor_ids().into_iter().collect::<Vec<_>>(), vec![20]);
}

#[test]
fn test_empty_filter_matches_everything() {
    let filter: MovieFilter = MovieFilter::new();
    assert!(filter.is_unfiltered());
    assert!(filter.matches(&create_test_movie()));
    assert!(filter.matches(&Movie::new(2, "Bare", "")));
}

#[test]
fn test_filter_is_or_within_a_dimension() {
    let filter: MovieFilter = MovieFilter::new().with_genres([11, 99]);
    assert!(filter.matches(&create_test_movie()));

    let filter: MovieFilter = MovieFilter::new().with_genres([98, 99]);
    assert!(!filter.matches(&create_test_movie()));
}

#[test]
fn test_filter_is_and_across_dimensions() {
    let both: MovieFilter = MovieFilter::new().with_genres([10]).with_actors([20]);
    assert!(both.matches(&create_test_movie()));

    let wrong_actor: MovieFilter = MovieFilter::new().with_genres([10]).with_actors([21]);
    assert!(!wrong_actor.matches(&create_test_movie()));
}

#[test]
fn test_filter_deduplicates_ids() {
    let filter: MovieFilter = MovieFilter::new().with_genres([3, 3, 1]).with_genres([1]);
    assert_eq!(filter.genre_ids().len(), 2);
    assert!(filter.actor_ids().is_empty());
}

#[test]
fn test_session_apply_only_touches_set_fields() {
    let mut session: MovieSession = MovieSession::new(1, datetime!(2026-05-01 18:00), 2, 3);

    session.apply(&MovieSessionUpdate {
        cinema_hall_id: Some(7),
        ..MovieSessionUpdate::default()
    });

    assert_eq!(session.show_time(), datetime!(2026-05-01 18:00));
    assert_eq!(session.movie_id(), 2);
    assert_eq!(session.cinema_hall_id(), 7);
}

#[test]
fn test_empty_update_is_empty() {
    assert!(MovieSessionUpdate::default().is_empty());
    assert!(
        !MovieSessionUpdate {
            movie_id: Some(1),
            ..MovieSessionUpdate::default()
        }
        .is_empty()
    );
}
