// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other test module opens an in-memory database, so migrations and
//! connection setup are exercised implicitly. These tests pin down the
//! remaining startup guarantees.

use std::path::PathBuf;

use super::create_test_persistence;
use crate::Persistence;
use crate::error::PersistenceError;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = create_test_persistence();
    let mut db2 = create_test_persistence();

    db1.create_genre("Drama").unwrap();

    assert_eq!(db1.list_genres().unwrap().len(), 1, "db1 should have 1 genre");
    assert!(
        db2.list_genres().unwrap().is_empty(),
        "db2 should have 0 genres (isolated)"
    );
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = create_test_persistence();

    assert!(persistence.list_genres().is_ok());
    assert!(persistence.list_actors().is_ok());
    assert!(persistence.list_cinema_halls().is_ok());
}

#[test]
fn test_foreign_key_enforcement_enabled() {
    let mut persistence = create_test_persistence();

    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_file_database_survives_reopen() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "cinema_persistence_test_{}.sqlite3",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_cinema_hall("Blue", 10, 12).unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let halls = reopened.list_cinema_halls().unwrap();
    assert_eq!(halls.len(), 1);
    assert_eq!(halls[0].name(), "Blue");

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}
