// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod catalog_tests;
mod config_tests;
mod initialization_tests;

use time::PrimitiveDateTime;

use crate::Persistence;

/// Ids of the catalog rows created by [`create_test_catalog`].
pub struct TestCatalog {
    pub drama: i64,
    pub comedy: i64,
    pub thriller: i64,
    pub pacino: i64,
    pub de_niro: i64,
    pub blue_hall: i64,
    pub red_hall: i64,
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Fills a fresh database with three genres, two actors, and two halls.
pub fn create_test_catalog(persistence: &mut Persistence) -> TestCatalog {
    TestCatalog {
        drama: persistence.create_genre("Drama").unwrap().id(),
        comedy: persistence.create_genre("Comedy").unwrap().id(),
        thriller: persistence.create_genre("Thriller").unwrap().id(),
        pacino: persistence.create_actor("Al", "Pacino").unwrap().id(),
        de_niro: persistence.create_actor("Robert", "De Niro").unwrap().id(),
        blue_hall: persistence.create_cinema_hall("Blue", 10, 12).unwrap().id(),
        red_hall: persistence.create_cinema_hall("Red", 8, 20).unwrap().id(),
    }
}

pub fn show_time(value: &str) -> PrimitiveDateTime {
    cinema_domain::parse_show_time(value).unwrap()
}
