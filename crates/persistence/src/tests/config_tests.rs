// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use clap::Parser;

use crate::DatabaseArgs;

#[derive(Debug, Parser)]
struct TestCli {
    #[command(flatten)]
    database: DatabaseArgs,
}

#[test]
fn test_database_flag_is_optional() {
    let cli = TestCli::try_parse_from(["cinema"]).unwrap();

    // CINEMA_DATABASE may be set in the environment running the tests.
    if std::env::var_os("CINEMA_DATABASE").is_none() {
        assert_eq!(cli.database, DatabaseArgs::default());
    }
}

#[test]
fn test_database_flag_sets_path() {
    let cli = TestCli::try_parse_from(["cinema", "--database", "/tmp/cinema.sqlite3"]).unwrap();

    assert_eq!(
        cli.database.database,
        Some(PathBuf::from("/tmp/cinema.sqlite3"))
    );
}

#[test]
fn test_short_database_flag() {
    let cli = TestCli::try_parse_from(["cinema", "-d", "cinema.sqlite3"]).unwrap();

    assert_eq!(cli.database.database, Some(PathBuf::from("cinema.sqlite3")));
}

#[test]
fn test_open_without_path_uses_in_memory_database() {
    let mut persistence = DatabaseArgs::default().open().unwrap();

    assert!(persistence.list_genres().unwrap().is_empty());
}
