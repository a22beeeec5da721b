//! PostgREST query strings.
//!
//! The hosted backend exposes each table under `/rest/v1/{table}` and takes
//! filters, ordering and relational embedding as query parameters. Pages build
//! their reads through [`TableQuery`] so the wire format lives in one place.

use std::fmt::Display;

use crate::tables;

/// Columns of a case study plus its author profile and category inline.
pub const CASE_STUDY_WITH_RELATIONS: &str = "*,author:profiles(*),category:categories(*)";
/// Columns of a case study plus its author profile inline.
pub const CASE_STUDY_WITH_AUTHOR: &str = "*,author:profiles(*)";

/// Sort direction of an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A read against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl TableQuery {
    /// Read every column of `table`, unfiltered.
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            params: Vec::new(),
        }
    }

    /// Table the query targets.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Unencoded `(key, value)` pairs in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the column list, embeddings included.
    pub fn select(mut self, columns: &str) -> Self {
        self.set("select", columns.to_string());
        self
    }

    /// `column=eq.value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Case-insensitive pattern match; `*` and `%` act as wildcards.
    pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
        self.params
            .push((column.to_string(), format!("ilike.{pattern}")));
        self
    }

    /// Match rows where any of `columns` contains `needle`, ignoring case.
    pub fn or_ilike(mut self, columns: &[&str], needle: &str) -> Self {
        if columns.is_empty() {
            return self;
        }
        let pattern = quote_logic_value(&format!("*{needle}*"));
        let clauses = columns
            .iter()
            .map(|column| format!("{column}.ilike.{pattern}"))
            .collect::<Vec<_>>()
            .join(",");
        self.params.push(("or".to_string(), format!("({clauses})")));
        self
    }

    /// Append an ordering term. Repeated calls produce a multi-column order.
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        let term = format!("{column}.{}", direction.as_str());
        match self.params.iter_mut().find(|(k, _)| k == "order") {
            Some((_, existing)) => {
                existing.push(',');
                existing.push_str(&term);
            },
            None => self.params.push(("order".to_string(), term)),
        }
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, count: usize) -> Self {
        self.set("limit", count.to_string());
        self
    }

    /// Percent-encoded `key=value&...` string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn set(&mut self, key: &str, value: String) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key.to_string(), value)),
        }
    }
}

/// Values inside `or=(...)` must be double-quoted when they contain characters
/// PostgREST treats as syntax.
fn quote_logic_value(value: &str) -> String {
    const RESERVED: [char; 6] = [',', '.', ':', '(', ')', '"'];
    if !value.contains(RESERVED) && !value.contains('\\') {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Ordering offered by the case study list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first.
    #[default]
    Latest,
    /// Highest view count first.
    MostViewed,
}

impl SortOrder {
    /// Value used by the sort `<select>`.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Latest => "created_at",
            SortOrder::MostViewed => "views",
        }
    }

    /// Unknown values fall back to [`SortOrder::Latest`].
    pub fn from_param(value: &str) -> Self {
        match value {
            "views" => SortOrder::MostViewed,
            _ => SortOrder::Latest,
        }
    }

    /// Option text in the sort `<select>`.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Latest => "Latest",
            SortOrder::MostViewed => "Most Popular",
        }
    }
}

/// Options of a case study list read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyFilter {
    /// Drop drafts.
    pub published_only: bool,
    /// Matched against title and excerpt.
    pub search: Option<String>,
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Restrict to one author.
    pub author_id: Option<String>,
    /// Ordering.
    pub sort: SortOrder,
    /// Maximum row count.
    pub limit: Option<usize>,
    /// Embed author and category rows.
    pub embed_relations: bool,
}

impl Default for CaseStudyFilter {
    fn default() -> Self {
        Self::published()
    }
}

impl CaseStudyFilter {
    /// Published rows with author and category embedded, newest first.
    pub fn published() -> Self {
        Self {
            published_only: true,
            search: None,
            category_id: None,
            author_id: None,
            sort: SortOrder::Latest,
            limit: None,
            embed_relations: true,
        }
    }

    /// Every row of one author, drafts included, without embeddings.
    pub fn by_author(author_id: &str) -> Self {
        Self {
            published_only: false,
            author_id: Some(author_id.to_string()),
            embed_relations: false,
            ..Self::published()
        }
    }

    /// Blank input clears the search.
    pub fn search(mut self, text: &str) -> Self {
        self.search = crate::non_blank_owned(text);
        self
    }

    /// Blank input clears the category filter.
    pub fn category(mut self, category_id: &str) -> Self {
        self.category_id = crate::non_blank_owned(category_id);
        self
    }

    /// Set the ordering.
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Cap the number of rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Lower into a read of `case_studies`.
    pub fn to_query(&self) -> TableQuery {
        let columns = if self.embed_relations { CASE_STUDY_WITH_RELATIONS } else { "*" };
        let mut query = TableQuery::new(tables::CASE_STUDIES).select(columns);

        if self.published_only {
            query = query.eq("published", true);
        }
        if let Some(text) = self.search.as_deref() {
            query = query.or_ilike(&["title", "excerpt"], text);
        }
        if let Some(category_id) = self.category_id.as_deref() {
            query = query.eq("category_id", category_id);
        }
        if let Some(author_id) = self.author_id.as_deref() {
            query = query.eq("author_id", author_id);
        }
        query = query.order(self.sort.as_param(), Direction::Desc);
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        query
    }
}

/// All categories, alphabetically.
pub fn categories_by_name() -> TableQuery {
    TableQuery::new(tables::CATEGORIES)
        .select("*")
        .order("name", Direction::Asc)
}

/// One case study with its author inline.
pub fn case_study_by_id(id: &str) -> TableQuery {
    TableQuery::new(tables::CASE_STUDIES)
        .select(CASE_STUDY_WITH_AUTHOR)
        .eq("id", id)
}

/// One profile row.
pub fn profile_by_id(id: &str) -> TableQuery {
    TableQuery::new(tables::PROFILES).select("*").eq("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_order_calls_accumulate() {
        let query = TableQuery::new(tables::CASE_STUDIES)
            .order("views", Direction::Desc)
            .order("created_at", Direction::Asc);
        assert_eq!(query.param("order"), Some("views.desc,created_at.asc"));
    }

    #[test]
    fn select_and_limit_are_replaced_not_duplicated() {
        let query = TableQuery::new(tables::CATEGORIES)
            .select("id")
            .select("*")
            .limit(3)
            .limit(6);
        assert_eq!(query.params().len(), 2);
        assert_eq!(query.param("select"), Some("*"));
        assert_eq!(query.param("limit"), Some("6"));
    }

    #[test]
    fn logic_values_with_reserved_characters_are_quoted() {
        assert_eq!(quote_logic_value("*seed*"), "*seed*");
        assert_eq!(quote_logic_value("*a,b*"), "\"*a,b*\"");
        assert_eq!(quote_logic_value("*say \"hi\"*"), "\"*say \\\"hi\\\"*\"");
    }
}
