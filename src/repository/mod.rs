use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::artist::Artist;
use crate::domain::search::{ArtistFilter, ArtistSortField, PageRequest, ValueRange};
use crate::domain::types::ArtistId;
use crate::repository::errors::RepositoryResult;

pub mod artist;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository shared by all request handlers.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Read access to the artists collection.
///
/// Every method acquires its own connection, so two calls issued from
/// different threads run independently.
pub trait ArtistReader {
    /// One page of artists matching `filter`, ordered ascending by `sort`.
    fn find_artists(
        &self,
        filter: &ArtistFilter,
        sort: ArtistSortField,
        page: PageRequest,
    ) -> RepositoryResult<Vec<Artist>>;
    /// Number of artists matching `filter`, regardless of paging.
    fn count_artists(&self, filter: &ArtistFilter) -> RepositoryResult<usize>;
    fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>>;
    /// Youngest and oldest age, `None` when there are no artists.
    fn age_range(&self) -> RepositoryResult<Option<ValueRange>>;
    fn years_active_range(&self) -> RepositoryResult<Option<ValueRange>>;
}
