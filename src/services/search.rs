//! Artist search and the read-only lookups backing the search form.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::artist::Artist;
use crate::domain::search::{
    ArtistSortField, PageRequest, SearchCriteria, SearchResult, ValueRange, build_filter,
};
use crate::domain::types::ArtistId;
use crate::repository::ArtistReader;
use crate::repository::errors::RepositoryResult;
use crate::services::{ServiceError, ServiceResult};

async fn join_blocking<T>(handle: JoinHandle<RepositoryResult<T>>) -> ServiceResult<T> {
    handle
        .await
        .map_err(|e| ServiceError::Internal(format!("Search task failed: {e}")))?
        .map_err(ServiceError::from)
}

/// Returns one page of artists matching `criteria` together with the total
/// number of matches.
///
/// The page fetch and the count run concurrently on the blocking pool, each
/// on its own connection. They are not taken from a common snapshot, so a
/// concurrent writer may make `count` disagree with the rows seen across
/// pages. A failure of either query fails the whole call.
pub async fn search_artists<R>(
    repo: Arc<R>,
    criteria: &SearchCriteria,
    sort: ArtistSortField,
    page: PageRequest,
) -> ServiceResult<SearchResult>
where
    R: ArtistReader + Send + Sync + 'static,
{
    let filter = build_filter(criteria);
    log::debug!(
        "Searching artists: filter={filter:?} sort={sort} offset={} limit={}",
        page.offset(),
        page.limit()
    );

    let find = {
        let repo = Arc::clone(&repo);
        let filter = filter.clone();
        tokio::task::spawn_blocking(move || repo.find_artists(&filter, sort, page))
    };
    let count = tokio::task::spawn_blocking(move || repo.count_artists(&filter));

    let (all, count) = tokio::try_join!(join_blocking(find), join_blocking(count))?;

    Ok(SearchResult::new(all, count, page))
}

/// Loads a single artist by identifier.
pub fn find_artist<R>(repo: &R, id: i32) -> ServiceResult<Artist>
where
    R: ArtistReader + ?Sized,
{
    let id = ArtistId::new(id)?;
    repo.get_artist_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Youngest and oldest artist age, `None` for an empty collection.
pub fn age_range<R>(repo: &R) -> ServiceResult<Option<ValueRange>>
where
    R: ArtistReader + ?Sized,
{
    Ok(repo.age_range()?)
}

/// Shortest and longest career length, `None` for an empty collection.
pub fn years_active_range<R>(repo: &R) -> ServiceResult<Option<ValueRange>>
where
    R: ArtistReader + ?Sized,
{
    Ok(repo.years_active_range()?)
}

#[cfg(test)]
mod tests {
    use std::sync::{Condvar, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::domain::search::{ArtistFilter, Range};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn artist(id: i32, name: &str, age: i32) -> Artist {
        Artist {
            id: ArtistId::new(id).unwrap(),
            name: name.to_string(),
            age,
            years_active: 5,
            genre: "Rock".to_string(),
            website: None,
            net_worth: 0,
            label_name: "Label".to_string(),
            retired: false,
        }
    }

    /// Both queries receive the same filter and the envelope echoes the page.
    #[tokio::test]
    async fn search_combines_page_and_count() {
        let mut repo = MockRepository::new();
        repo.expect_find_artists()
            .withf(|filter, sort, page| {
                filter.age == Some(Range::between(30, 40))
                    && *sort == ArtistSortField::Age
                    && page.offset() == 2
                    && page.limit() == 2
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![artist(3, "C", 33), artist(4, "D", 34)]));
        repo.expect_count_artists()
            .withf(|filter: &ArtistFilter| filter.age == Some(Range::between(30, 40)))
            .times(1)
            .returning(|_| Ok(7));

        let criteria = SearchCriteria::new().age(Range::between(30, 40));
        let page = PageRequest::new(2, 2).unwrap();
        let result = search_artists(Arc::new(repo), &criteria, ArtistSortField::Age, page)
            .await
            .unwrap();

        assert_eq!(result.count, 7);
        assert_eq!(result.offset, 2);
        assert_eq!(result.limit, 2);
        assert_eq!(
            result.all.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["C", "D"]
        );
    }

    /// A failing count fails the whole search, no partial result.
    #[tokio::test]
    async fn search_propagates_count_failure() {
        let mut repo = MockRepository::new();
        repo.expect_find_artists()
            .returning(|_, _, _| Ok(vec![artist(1, "A", 20)]));
        repo.expect_count_artists()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let result = search_artists(
            Arc::new(repo),
            &SearchCriteria::new(),
            ArtistSortField::Name,
            PageRequest::default(),
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    /// A failing fetch fails the whole search as well.
    #[tokio::test]
    async fn search_propagates_find_failure() {
        let mut repo = MockRepository::new();
        repo.expect_find_artists()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError("bad".to_string())));
        repo.expect_count_artists().returning(|_| Ok(1));

        let result = search_artists(
            Arc::new(repo),
            &SearchCriteria::new().name("smith"),
            ArtistSortField::Name,
            PageRequest::default(),
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::DatabaseError(_)))
        ));
    }

    /// Repository whose fetch and count only return once both are in flight.
    #[derive(Default)]
    struct RendezvousRepo {
        arrived: Mutex<usize>,
        both_arrived: Condvar,
    }

    impl RendezvousRepo {
        fn meet(&self) -> RepositoryResult<()> {
            let mut arrived = self.arrived.lock().unwrap();
            *arrived += 1;
            self.both_arrived.notify_all();
            let (_arrived, wait) = self
                .both_arrived
                .wait_timeout_while(arrived, Duration::from_secs(5), |n| *n < 2)
                .unwrap();
            if wait.timed_out() {
                return Err(RepositoryError::Unexpected(
                    "fetch and count did not overlap".to_string(),
                ));
            }
            Ok(())
        }
    }

    impl ArtistReader for RendezvousRepo {
        fn find_artists(
            &self,
            _filter: &ArtistFilter,
            _sort: ArtistSortField,
            _page: PageRequest,
        ) -> RepositoryResult<Vec<Artist>> {
            self.meet()?;
            Ok(vec![artist(1, "A", 20)])
        }

        fn count_artists(&self, _filter: &ArtistFilter) -> RepositoryResult<usize> {
            self.meet()?;
            Ok(1)
        }

        fn get_artist_by_id(&self, _id: ArtistId) -> RepositoryResult<Option<Artist>> {
            unimplemented!()
        }

        fn age_range(&self) -> RepositoryResult<Option<ValueRange>> {
            unimplemented!()
        }

        fn years_active_range(&self) -> RepositoryResult<Option<ValueRange>> {
            unimplemented!()
        }
    }

    /// Fetch and count are in flight at the same time; run one after the
    /// other, each would give up waiting for its partner.
    #[tokio::test]
    async fn search_runs_fetch_and_count_concurrently() {
        let repo = Arc::new(RendezvousRepo::default());

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            search_artists(
                repo,
                &SearchCriteria::new(),
                ArtistSortField::Name,
                PageRequest::default(),
            ),
        )
        .await
        .expect("search finished in time")
        .unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.all.len(), 1);
    }

    #[test]
    fn find_artist_maps_missing_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_artist_by_id().returning(|_| Ok(None));

        assert!(matches!(find_artist(&repo, 9), Err(ServiceError::NotFound)));
    }

    #[test]
    fn find_artist_rejects_invalid_id_without_querying() {
        let mut repo = MockRepository::new();
        repo.expect_get_artist_by_id().times(0);

        assert!(matches!(
            find_artist(&repo, 0),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn ranges_are_passed_through() {
        let mut repo = MockRepository::new();
        repo.expect_age_range()
            .returning(|| Ok(Some(ValueRange { min: 18, max: 70 })));
        repo.expect_years_active_range().returning(|| Ok(None));

        assert_eq!(
            age_range(&repo).unwrap(),
            Some(ValueRange { min: 18, max: 70 })
        );
        assert_eq!(years_active_range(&repo).unwrap(), None);
    }
}
