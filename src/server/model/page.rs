//! Paging and sorting requests.
//!
//! Search endpoints accept `page`, `size` and any number of `sort` parameters. The raw
//! strings are collected into a [`PageQuery`] by the extractor and validated here into a
//! typed [`PageRequest`], so a bad value is reported as `InvalidFieldValue` together with
//! the values that would have been accepted.

use sea_orm::Order;

use crate::{
    model::field::{AllowedValues, Bound, FieldValue},
    server::error::tracker::TrackerError,
};

/// Page numbers are 1-based.
pub const FIRST_PAGE: u64 = 1;
/// Page size used when the client doesn't send one.
pub const DEFAULT_PAGE_SIZE: u64 = 100;
/// Larger requested sizes are silently reduced to this.
pub const MAX_PAGE_SIZE: u64 = 500;
/// Largest row offset the database accepts, a signed 64-bit `OFFSET`.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A column, or related column, a search can be ordered by.
pub trait SortField: Copy + Default + Sized {
    /// Name used in the query string, e.g. `created_at` or `save.name`.
    fn name(&self) -> String;

    /// Every sortable field, in documentation order.
    fn values() -> Vec<Self>;

    /// Look up a field by name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::values()
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }
}

/// Direction of a sort, ascending unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// `asc`
    #[default]
    Asc,
    /// `desc`
    Desc,
}

impl SortDirection {
    const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    /// Name used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(name))
    }
}

impl From<SortDirection> for Order {
    fn from(value: SortDirection) -> Self {
        match value {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// One `field[:direction]` entry of a `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort<F> {
    /// Field to order by
    pub field: F,
    /// Ascending or descending
    pub direction: SortDirection,
}

impl<F: SortField> Sort<F> {
    /// Parse `field` or `field:direction`.
    pub fn parse(raw: &str) -> Result<Self, TrackerError> {
        let (field_raw, direction_raw) = match raw.split_once(':') {
            Some((field, direction)) => (field, Some(direction)),
            None => (raw, None),
        };

        let field = F::from_name(field_raw).ok_or_else(|| {
            TrackerError::invalid_field(
                FieldValue::new("sort:field", field_raw),
                AllowedValues::choice(F::values().iter().map(|field| field.name())),
            )
        })?;

        let direction = match direction_raw {
            None => SortDirection::default(),
            Some(direction) => SortDirection::from_name(direction).ok_or_else(|| {
                TrackerError::invalid_field(
                    FieldValue::new("sort:direction", direction),
                    AllowedValues::choice(SortDirection::ALL.iter().map(|d| d.as_str())),
                )
            })?,
        };

        Ok(Self { field, direction })
    }
}

/// Raw, unvalidated paging parameters of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// Raw `page` parameter
    pub page: Option<String>,
    /// Raw `size` parameter
    pub size: Option<String>,
    /// Every `field[:direction]` of every `sort` parameter, in request order
    pub sorts: Vec<String>,
    /// Optional name filter, only meaningful for solar system searches
    pub name: Option<String>,
}

impl PageQuery {
    /// Collect query string pairs.
    ///
    /// `sort` may be repeated and each value may hold several comma separated sorts;
    /// they apply in the order given. Unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = Some(value),
                "size" => query.size = Some(value),
                "name" => query.name = Some(value),
                "sort" => query.sorts.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|sort| !sort.is_empty())
                        .map(str::to_string),
                ),
                _ => {}
            }
        }

        query
    }
}

/// Validated paging parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<F> {
    /// 1-based page number
    pub page: u64,
    /// Rows per page, `1..=500`
    pub size: u64,
    /// Sorts to apply, first one most significant; never empty once parsed
    pub sorts: Vec<Sort<F>>,
}

impl<F: SortField> PageRequest<F> {
    /// Validate a [`PageQuery`].
    ///
    /// Page numbers below 1 are raised to 1 and sizes are clamped to `1..=500`.
    /// Without any `sort` the default field of `F` is used, ascending.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Parameters are usable as is
    /// - `Err(TrackerError::InvalidFieldValue)` - Non-numeric page/size, a page whose offset
    ///   exceeds the database range, unknown sort field or direction
    pub fn parse(query: &PageQuery) -> Result<Self, TrackerError> {
        let size = parse_number("size", query.size.as_deref())?
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let page = parse_number("page", query.page.as_deref())?
            .unwrap_or(FIRST_PAGE)
            .max(FIRST_PAGE);

        // (page - 1) * size must stay within MAX_OFFSET
        let max_page = MAX_OFFSET / size;
        if page > max_page {
            return Err(TrackerError::invalid_field(
                FieldValue::new("page", page.to_string()),
                AllowedValues::integer_range(Bound::inclusive(FIRST_PAGE), Bound::inclusive(max_page)),
            ));
        }

        let mut sorts = query
            .sorts
            .iter()
            .map(|sort| Sort::parse(sort))
            .collect::<Result<Vec<Sort<F>>, TrackerError>>()?;

        if sorts.is_empty() {
            sorts.push(Sort::default());
        }

        Ok(Self { page, size, sorts })
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(FIRST_PAGE)
            .saturating_mul(self.size)
            .min(MAX_OFFSET)
    }
}

impl<F: SortField> Default for PageRequest<F> {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sorts: vec![Sort::default()],
        }
    }
}

fn parse_number(name: &str, raw: Option<&str>) -> Result<Option<u64>, TrackerError> {
    raw.map(|value| {
        value.trim().parse::<u64>().map_err(|_| {
            TrackerError::invalid_field(
                FieldValue::new(name, value),
                AllowedValues::integer_min(Bound::inclusive(1)),
            )
        })
    })
    .transpose()
}
