use diesel::dsl;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;

use crate::domain::artist::Artist;
use crate::domain::search::{ArtistFilter, ArtistSortField, PageRequest, Range, ValueRange};
use crate::domain::types::ArtistId;
use crate::models::artist::Artist as DbArtist;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ArtistReader, DieselRepository};
use crate::schema::{artists, artists_fts};

diesel::infix_operator!(Matches, " MATCH ", backend: Sqlite);

/// Builds an FTS5 query where any whitespace separated term of `phrase`
/// matches. Terms are quoted so that FTS5 operators in user input are taken
/// literally.
pub fn fts_match_expression(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|term| format!("\"{}\"", term.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn filtered(filter: &ArtistFilter) -> artists::BoxedQuery<'static, Sqlite> {
    let mut query = artists::table.into_boxed();

    if let Some(text) = &filter.text {
        let expression = fts_match_expression(text);
        query = query.filter(
            artists::id.eq_any(
                artists_fts::table
                    .select(artists_fts::rowid)
                    .filter(Matches::new(
                        artists_fts::name,
                        expression.into_sql::<Text>(),
                    )),
            ),
        );
    }

    if let Some(Range { min, max }) = filter.age {
        if let Some(min) = min {
            query = query.filter(artists::age.ge(min));
        }
        if let Some(max) = max {
            query = query.filter(artists::age.le(max));
        }
    }

    if let Some(Range { min, max }) = filter.years_active {
        if let Some(min) = min {
            query = query.filter(artists::years_active.ge(min));
        }
        if let Some(max) = max {
            query = query.filter(artists::years_active.le(max));
        }
    }

    query
}

fn sorted(
    query: artists::BoxedQuery<'static, Sqlite>,
    sort: ArtistSortField,
) -> artists::BoxedQuery<'static, Sqlite> {
    let query = match sort {
        ArtistSortField::Name => query.order(artists::name.asc()),
        ArtistSortField::Age => query.order(artists::age.asc()),
        ArtistSortField::YearsActive => query.order(artists::years_active.asc()),
        ArtistSortField::Genre => query.order(artists::genre.asc()),
        ArtistSortField::NetWorth => query.order(artists::net_worth.asc()),
        ArtistSortField::LabelName => query.order(artists::label_name.asc()),
    };
    // Stable paging across equal sort keys.
    query.then_order_by(artists::id.asc())
}

fn to_domain(rows: Vec<DbArtist>) -> RepositoryResult<Vec<Artist>> {
    rows.into_iter()
        .map(|row| Artist::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn to_value_range(bounds: (Option<i32>, Option<i32>)) -> Option<ValueRange> {
    match bounds {
        (Some(min), Some(max)) => Some(ValueRange { min, max }),
        _ => None,
    }
}

impl ArtistReader for DieselRepository {
    fn find_artists(
        &self,
        filter: &ArtistFilter,
        sort: ArtistSortField,
        page: PageRequest,
    ) -> RepositoryResult<Vec<Artist>> {
        let mut conn = self.conn()?;

        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let rows = sorted(filtered(filter), sort)
            .limit(limit)
            .offset(offset)
            .load::<DbArtist>(&mut conn)?;

        to_domain(rows)
    }

    fn count_artists(&self, filter: &ArtistFilter) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(filter).count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>> {
        let mut conn = self.conn()?;

        let artist = artists::table
            .find(id.get())
            .select(DbArtist::as_select())
            .first::<DbArtist>(&mut conn)
            .optional()?;

        Ok(artist.map(Artist::try_from).transpose()?)
    }

    fn age_range(&self) -> RepositoryResult<Option<ValueRange>> {
        let mut conn = self.conn()?;

        let bounds = artists::table
            .select((dsl::min(artists::age), dsl::max(artists::age)))
            .first::<(Option<i32>, Option<i32>)>(&mut conn)?;

        Ok(to_value_range(bounds))
    }

    fn years_active_range(&self) -> RepositoryResult<Option<ValueRange>> {
        let mut conn = self.conn()?;

        let bounds = artists::table
            .select((
                dsl::min(artists::years_active),
                dsl::max(artists::years_active),
            ))
            .first::<(Option<i32>, Option<i32>)>(&mut conn)?;

        Ok(to_value_range(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_expression_quotes_each_term() {
        assert_eq!(fts_match_expression("smith"), "\"smith\"");
        assert_eq!(
            fts_match_expression("  john   smith "),
            "\"john\" OR \"smith\""
        );
    }

    #[test]
    fn match_expression_escapes_quotes_and_operators() {
        assert_eq!(fts_match_expression("a\"b"), "\"a\"\"b\"");
        assert_eq!(fts_match_expression("NOT*"), "\"NOT*\"");
    }

    #[test]
    fn value_range_requires_both_bounds() {
        assert_eq!(
            to_value_range((Some(20), Some(60))),
            Some(ValueRange { min: 20, max: 60 })
        );
        assert_eq!(to_value_range((None, None)), None);
    }
}
