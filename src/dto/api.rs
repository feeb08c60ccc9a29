//! DTOs exposed by the artist API endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::search::{
    ArtistSortField, DEFAULT_LIMIT, DEFAULT_OFFSET, PageRequest, Range, SearchCriteria,
};
use crate::domain::types::TypeConstraintError;

/// Largest page a client may request in one call.
pub const MAX_LIMIT: usize = 100;

/// Query parameters accepted by `GET /api/v1/artists`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    /// Optional full-text phrase matched against artist names.
    pub name: Option<String>,
    #[serde(alias = "ageMin")]
    pub age_min: Option<i32>,
    #[serde(alias = "ageMax")]
    pub age_max: Option<i32>,
    #[serde(alias = "yearsActiveMin")]
    pub years_active_min: Option<i32>,
    #[serde(alias = "yearsActiveMax")]
    pub years_active_max: Option<i32>,
    /// Column to sort by, `name` when omitted.
    pub sort: Option<String>,
    pub offset: Option<usize>,
    /// Page size, at most [`MAX_LIMIT`].
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

/// Fully resolved search request with all defaults applied.
#[derive(Debug, PartialEq)]
pub struct SearchRequest {
    pub criteria: SearchCriteria,
    pub sort: ArtistSortField,
    pub page: PageRequest,
}

fn range(min: Option<i32>, max: Option<i32>) -> Option<Range> {
    if min.is_none() && max.is_none() {
        None
    } else {
        Some(Range::new(min, max))
    }
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = TypeConstraintError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let sort = match params.sort.as_deref() {
            Some(sort) => sort.parse()?,
            None => ArtistSortField::default(),
        };

        let page = PageRequest::new(
            params.offset.unwrap_or(DEFAULT_OFFSET),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )?;

        let criteria = SearchCriteria {
            name: params.name,
            age: range(params.age_min, params.age_max),
            years_active: range(params.years_active_min, params.years_active_max),
        };

        Ok(Self {
            criteria,
            sort,
            page,
        })
    }
}
