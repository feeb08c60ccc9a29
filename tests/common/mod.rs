#![allow(dead_code)]

use artist_search::db::{DbPool, establish_connection_pool, run_migrations};
use artist_search::repository::DieselRepository;
use artist_search::schema::artists;
use diesel::prelude::*;
use tempfile::TempDir;

/// Temporary SQLite database with the schema applied, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

#[derive(Insertable)]
#[diesel(table_name = artists)]
pub struct NewArtist<'a> {
    pub name: &'a str,
    pub age: i32,
    pub years_active: i32,
    pub genre: &'a str,
    pub label_name: &'a str,
    pub net_worth: i64,
}

impl<'a> NewArtist<'a> {
    pub fn new(name: &'a str, age: i32, years_active: i32) -> Self {
        Self {
            name,
            age,
            years_active,
            genre: "Rock",
            label_name: "Independent",
            net_worth: 0,
        }
    }
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn insert(&self, new_artists: &[NewArtist<'_>]) {
        let mut conn = self.pool.get().expect("connection");
        diesel::insert_into(artists::table)
            .values(new_artists)
            .execute(&mut conn)
            .expect("insert artists");
    }
}
