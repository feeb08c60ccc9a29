//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::artist::Artist;
use crate::domain::search::{ArtistFilter, ArtistSortField, PageRequest, ValueRange};
use crate::domain::types::ArtistId;
use crate::repository::ArtistReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl ArtistReader for Repository {
        fn find_artists(
            &self,
            filter: &ArtistFilter,
            sort: ArtistSortField,
            page: PageRequest,
        ) -> RepositoryResult<Vec<Artist>>;
        fn count_artists(&self, filter: &ArtistFilter) -> RepositoryResult<usize>;
        fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>>;
        fn age_range(&self) -> RepositoryResult<Option<ValueRange>>;
        fn years_active_range(&self) -> RepositoryResult<Option<ValueRange>>;
    }
}
