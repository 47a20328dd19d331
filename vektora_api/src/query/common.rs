//! Shared list-query infrastructure: paging, sorting, and URL serialization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use super::filter::{Filter, FilterSet};

/// Sort order for list endpoints.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    #[serde(rename = "asc")]
    Asc,
    /// Descending order.
    #[serde(rename = "desc")]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Paging, sorting, and filter parameters shared by every list endpoint.
///
/// The serialized query-pair order is fixed, and client-side predicates are
/// never serialized; both properties are what make cache keys derived from a
/// query deterministic.
#[derive(Clone, Debug)]
pub struct ListQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page_number: i64,
    /// Results per page. `None` uses the server default.
    pub page_size: Option<i64>,
    /// Column to sort by, in the server's field naming (e.g. `Id`).
    pub sort_by: Option<String>,
    /// Sort direction, only sent alongside `sort_by`.
    pub sort_direction: SortDirection,
    /// Filters to apply; see [`FilterSet`] for the pushdown split.
    pub filters: FilterSet,
}

impl Default for ListQuery {
    fn default() -> ListQuery {
        ListQuery {
            page_number: 1,
            page_size: None,
            sort_by: None,
            sort_direction: SortDirection::Asc,
            filters: FilterSet::None,
        }
    }
}

impl ListQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets the number of results per page.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the sort column.
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self
    }

    /// Sets the sort direction.
    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = sort_direction;
        self
    }

    /// Appends a pushdown filter. Switching from a client-side predicate set
    /// replaces it.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters = match self.filters {
            FilterSet::Pushdown(mut filters) => {
                filters.push(filter);
                FilterSet::Pushdown(filters)
            }
            _ => FilterSet::Pushdown(vec![filter]),
        };
        self
    }

    /// Replaces the whole filter set.
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// The exact query pairs sent to the server, in their fixed order. The
    /// cache-key registry renders keys from this same output, so whatever is
    /// sent is keyed and whatever is keyed is sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pageNumber", self.page_number.to_string())];
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
            pairs.push(("sortDirection", self.sort_direction.to_string()));
        }
        if let Some(filters) = self.filters.to_query_value() {
            pairs.push(("filters", filters));
        }
        pairs
    }

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (name, value) in self.query_pairs() {
            url.query_pairs_mut().append_pair(name, &value);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{Filter, FilterOperator, FilterSet, ListQuery, SortDirection};

    fn base_url() -> Url {
        Url::parse("https://example.com/api/User").unwrap()
    }

    #[test]
    fn defaults_send_only_the_page_number() {
        let url = ListQuery::default().add_to_url(&base_url());
        insta::assert_snapshot!(url.as_str(), @"https://example.com/api/User?pageNumber=1");
    }

    #[test]
    fn full_paging_and_sort() {
        let url = ListQuery::default()
            .with_page(3)
            .with_page_size(50)
            .with_sort_by("Id")
            .with_sort_direction(SortDirection::Desc)
            .add_to_url(&base_url());
        insta::assert_snapshot!(
            url.as_str(),
            @"https://example.com/api/User?pageNumber=3&pageSize=50&sortBy=Id&sortDirection=desc"
        );
    }

    #[test]
    fn sort_direction_requires_a_sort_column() {
        let url = ListQuery::default()
            .with_sort_direction(SortDirection::Desc)
            .add_to_url(&base_url());
        assert!(!url.as_str().contains("sortDirection"));
    }

    #[test]
    fn pushdown_filters_are_serialized_as_json() {
        let query = ListQuery::default()
            .with_filter(Filter::new("status", FilterOperator::Equals, "active"));
        let pairs = query.query_pairs();
        let filters = &pairs.iter().find(|(name, _)| *name == "filters").unwrap().1;
        assert_eq!(
            filters,
            r#"[{"column":"status","operator":"eq","value":"active"}]"#
        );
    }

    #[test]
    fn client_side_predicates_are_not_serialized() {
        let mut predicate = serde_json::Map::new();
        predicate.insert("quick".to_string(), serde_json::json!("ankara"));
        let query = ListQuery::default().with_filters(FilterSet::ClientSide(predicate));
        assert!(query.query_pairs().iter().all(|(name, _)| *name != "filters"));
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
