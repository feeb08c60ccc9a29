//! Search criteria, paging and the store-agnostic filter derived from them.
//!
//! [`build_filter`] is the only place criteria are interpreted. Repository
//! implementations translate the resulting [`ArtistFilter`] into their own
//! query dialect and must honour its three predicate shapes: full-text match,
//! inclusive numeric range, and implicit conjunction of all present fields.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::artist::Artist;
use crate::domain::types::TypeConstraintError;

/// Number of records skipped when the caller does not ask for an offset.
pub const DEFAULT_OFFSET: usize = 0;
/// Page size used when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 20;

/// Inclusive numeric range. A missing bound leaves that side open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl Range {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// Range with both bounds present, `min <= value <= max`.
    pub fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[cfg(test)]
    fn contains(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Caller-supplied filter intent. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub age: Option<Range>,
    pub years_active: Option<Range>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, range: Range) -> Self {
        self.age = Some(range);
        self
    }

    pub fn years_active(mut self, range: Range) -> Self {
        self.years_active = Some(range);
        self
    }
}

/// Column used to order search results. Ordering is always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArtistSortField {
    #[default]
    Name,
    Age,
    YearsActive,
    Genre,
    NetWorth,
    LabelName,
}

impl ArtistSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistSortField::Name => "name",
            ArtistSortField::Age => "age",
            ArtistSortField::YearsActive => "years_active",
            ArtistSortField::Genre => "genre",
            ArtistSortField::NetWorth => "net_worth",
            ArtistSortField::LabelName => "label_name",
        }
    }
}

impl Display for ArtistSortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtistSortField {
    type Err = TypeConstraintError;

    /// Accepts both snake_case and the camelCase spelling used by web clients.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(ArtistSortField::Name),
            "age" => Ok(ArtistSortField::Age),
            "years_active" | "yearsActive" => Ok(ArtistSortField::YearsActive),
            "genre" => Ok(ArtistSortField::Genre),
            "net_worth" | "netWorth" => Ok(ArtistSortField::NetWorth),
            "label_name" | "labelName" => Ok(ArtistSortField::LabelName),
            other => Err(TypeConstraintError::UnknownSortField(other.to_string())),
        }
    }
}

/// Offset/limit window over the ordered result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Result<Self, TypeConstraintError> {
        if limit == 0 {
            return Err(TypeConstraintError::ZeroLimit);
        }
        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Result envelope: one page of artists plus the size of the full match set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    pub all: Vec<Artist>,
    pub count: usize,
    pub offset: usize,
    pub limit: usize,
}

impl SearchResult {
    pub fn new(all: Vec<Artist>, count: usize, page: PageRequest) -> Self {
        Self {
            all,
            count,
            offset: page.offset(),
            limit: page.limit(),
        }
    }
}

/// Smallest and largest value of a numeric column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

/// Store-agnostic predicate derived from [`SearchCriteria`].
///
/// Present fields are combined with logical AND; an empty filter matches
/// every record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtistFilter {
    /// Full-text phrase matched against the artist name index.
    pub text: Option<String>,
    pub age: Option<Range>,
    pub years_active: Option<Range>,
}

impl ArtistFilter {
    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.text.is_none() && self.age.is_none() && self.years_active.is_none()
    }
}

/// Translates criteria into a filter.
///
/// Never fails: inverted ranges (`min > max`) are kept as-is, producing a
/// filter that matches nothing. A whitespace-only name is dropped and so
/// matches every record, where a text index given a blank phrase would match
/// none.
pub fn build_filter(criteria: &SearchCriteria) -> ArtistFilter {
    ArtistFilter {
        text: criteria
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
        age: criteria.age,
        years_active: criteria.years_active,
    }
}
