//! Integration tests: query.
#[cfg(test)]
mod tests {
    use startup_stories_shared::query::{self, CaseStudyFilter, SortOrder};

    #[test]
    fn featured_query_orders_by_views_with_limit() {
        let query = CaseStudyFilter::published()
            .sort(SortOrder::MostViewed)
            .limit(6)
            .to_query();

        assert_eq!(query.table(), "case_studies");
        assert_eq!(query.param("select"), Some(query::CASE_STUDY_WITH_RELATIONS));
        assert_eq!(query.param("published"), Some("eq.true"));
        assert_eq!(query.param("order"), Some("views.desc"));
        assert_eq!(query.param("limit"), Some("6"));
    }

    #[test]
    fn search_and_category_filters_are_combined() {
        let query = CaseStudyFilter::published()
            .search("  fintech ")
            .category("cat-7")
            .to_query();

        assert_eq!(query.param("or"), Some("(title.ilike.*fintech*,excerpt.ilike.*fintech*)"));
        assert_eq!(query.param("category_id"), Some("eq.cat-7"));
        assert_eq!(query.param("order"), Some("created_at.desc"));
        assert_eq!(query.param("limit"), None);
    }

    #[test]
    fn blank_search_adds_no_filter() {
        let query = CaseStudyFilter::published().search("   ").category("").to_query();
        assert_eq!(query.param("or"), None);
        assert_eq!(query.param("category_id"), None);
    }

    #[test]
    fn author_query_includes_drafts() {
        let query = CaseStudyFilter::by_author("user-1").to_query();
        assert_eq!(query.param("select"), Some("*"));
        assert_eq!(query.param("published"), None);
        assert_eq!(query.param("author_id"), Some("eq.user-1"));
        assert_eq!(query.param("order"), Some("created_at.desc"));
    }

    #[test]
    fn query_string_is_percent_encoded() {
        let encoded = query::categories_by_name().to_query_string();
        assert_eq!(encoded, "select=%2A&order=name.asc");

        let encoded = query::case_study_by_id("a b").to_query_string();
        assert_eq!(encoded, "select=%2A%2Cauthor%3Aprofiles%28%2A%29&id=eq.a%20b");
    }

    #[test]
    fn sort_order_round_trips_through_select_value() {
        assert_eq!(SortOrder::from_param("views"), SortOrder::MostViewed);
        assert_eq!(SortOrder::from_param("created_at"), SortOrder::Latest);
        assert_eq!(SortOrder::from_param("bogus"), SortOrder::Latest);
    }
}
