//! Subcommands per resource, plus the shared list-flag plumbing.

pub mod approval_roles;
pub mod auth;
pub mod branch;
pub mod price_rules;
pub mod quotations;
pub mod report_mappings;
pub mod role_groups;
pub mod users;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use vektora_lib::types::{Entity, PagedResult};
use vektora_lib::validation;
use vektora_lib::{CachedClient, Filter, FilterOperator, FilterSet, ListQuery, SortDirection};

/// Paging, sorting, and filter flags shared by every `list` subcommand.
#[derive(Args, Clone)]
pub struct ListFlags {
    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: i64,

    /// Sort column, in the server's field naming (e.g. Id, CreatedDate)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Server-side filter as column=value (repeatable). Use column~value
    /// for a substring filter.
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Local substring match as field=value (repeatable), applied after
    /// the fetch without touching the server query
    #[arg(long = "match")]
    pub matches: Vec<String>,

    /// Walk every page instead of one
    #[arg(long)]
    pub all: bool,
}

impl ListFlags {
    /// Builds the server query from these flags. Local `--match` predicates
    /// are deliberately not part of it; see [`ListFlags::local_predicate`].
    pub fn to_query(&self) -> Result<ListQuery> {
        let mut query = ListQuery::default()
            .with_page(validation::validate_page_number(self.page)?)
            .with_page_size(validation::validate_page_size(self.page_size)?);
        if let Some(sort_by) = &self.sort_by {
            query = query.with_sort_by(&validation::sanitize_text(sort_by, 50)?);
            if self.desc {
                query = query.with_sort_direction(SortDirection::Desc);
            }
        } else if self.desc {
            bail!("--desc requires --sort-by");
        }
        for raw in &self.filters {
            query = query.with_filter(parse_filter(raw)?);
        }
        Ok(query)
    }

    /// The local predicate from `--match` flags, applied to fetched rows.
    pub fn local_predicate(&self) -> Result<FilterSet> {
        if self.matches.is_empty() {
            return Ok(FilterSet::None);
        }
        let mut predicate = serde_json::Map::new();
        for raw in &self.matches {
            let Some((field, value)) = raw.split_once('=') else {
                bail!("invalid --match '{}', expected field=value", raw);
            };
            predicate.insert(
                field.trim().to_string(),
                serde_json::Value::String(validation::validate_search(value)?),
            );
        }
        Ok(FilterSet::ClientSide(predicate))
    }
}

fn parse_filter(raw: &str) -> Result<Filter> {
    let (column, operator, value) = if let Some((column, value)) = raw.split_once('~') {
        (column, FilterOperator::Contains, value)
    } else if let Some((column, value)) = raw.split_once('=') {
        (column, FilterOperator::Equals, value)
    } else {
        bail!("invalid --filter '{}', expected column=value or column~value", raw);
    };
    let column = validation::sanitize_text(column, 50)?;
    let value = validation::validate_search(value)?;
    Ok(Filter::new(column, operator, value))
}

/// Fetches one page, or walks every page with a progress bar when `all` is
/// set. The combined result keeps the first page's total count.
pub async fn fetch_pages<E: Entity>(
    client: &CachedClient,
    query: &ListQuery,
    all: bool,
) -> Result<PagedResult<E>> {
    let first = client.list::<E>(query).await?;
    let total_pages = first.total_pages();
    // Iterate from the page the query asked for; some endpoints omit
    // pageNumber from the echo and it defaults to 0.
    if !all || total_pages <= query.page_number {
        return Ok(first);
    }

    let pb = ProgressBar::new(total_pages as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} pages")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.inc(1);

    let mut combined = first;
    for page in (query.page_number + 1)..=total_pages {
        let next = client.list::<E>(&query.clone().with_page(page)).await?;
        combined.data.extend(next.data);
        pb.inc(1);
    }
    pb.finish_and_clear();
    combined.page_size = combined.total_count;
    Ok(combined)
}

/// Applies a local `--match` predicate to fetched rows.
pub fn apply_local_predicate<E: Serialize>(rows: Vec<E>, predicate: &FilterSet) -> Vec<E> {
    if matches!(predicate, FilterSet::None) {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            serde_json::to_value(row)
                .map(|value| predicate.matches(&value))
                .unwrap_or(true)
        })
        .collect()
}

/// The `Page x/y (n total)` banner printed before list output.
pub fn print_page_banner<E>(page: &PagedResult<E>) {
    let total_pages = page.total_pages();
    if total_pages > 1 {
        eprintln!(
            "Page {}/{} ({} total)",
            page.page_number, total_pages, page.total_count
        );
    } else {
        eprintln!("{} total", page.total_count);
    }
}
