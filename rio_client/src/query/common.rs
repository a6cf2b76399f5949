//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

/// Trait implemented by all query builders. Provides parameter rendering and
/// shared builder methods for pagination.
pub trait Query {
    /// Returns this query's parameters. `None` values are left out of the URL.
    fn to_params(&self) -> Vec<(String, Option<String>)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (0-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }
}

/// Sort order for list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Pagination fields shared by all query types. Unset fields use the
/// service defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (0-indexed).
    pub page: Option<i64>,
    /// Results per page.
    pub per_page: Option<i64>,
}

impl QueryCommon {
    /// The `page` and `per_page` parameters.
    pub fn to_params(&self) -> Vec<(String, Option<String>)> {
        vec![
            ("page".to_string(), self.page.map(|p| p.to_string())),
            ("per_page".to_string(), self.per_page.map(|p| p.to_string())),
        ]
    }
}

/// Plain pagination, accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub common: QueryCommon,
}

impl PageQuery {
    pub fn new(page: i64, per_page: i64) -> Self {
        PageQuery::default().with_page(page).with_per_page(per_page)
    }
}

impl Query for PageQuery {
    fn to_params(&self) -> Vec<(String, Option<String>)> {
        self.common.to_params()
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
