//! List-query construction: paging, sorting, and filter parameters.

mod common;
mod filter;

pub use self::common::{ListQuery, SortDirection};
pub use self::filter::{Filter, FilterOperator, FilterSet};
