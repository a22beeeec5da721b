//! Integration tests: text.
#[cfg(test)]
mod tests {
    use startup_stories_shared::text;

    #[test]
    fn slugify_matches_expected_form() {
        assert_eq!(text::slugify("My Startup! Story"), "my-startup-story");
        assert_eq!(text::slugify("B2B -  SaaS   Playbook"), "b2b-saas-playbook");
    }

    #[test]
    fn slugify_keeps_edge_hyphens() {
        assert_eq!(text::slugify(" Why we failed "), "-why-we-failed-");
        assert_eq!(text::slugify("--Pivot--"), "-pivot-");
        assert_eq!(text::slugify("Hello, World!"), "hello-world");
        assert_eq!(text::slugify("tabs\tand\nnewlines"), "tabsandnewlines");
    }

    #[test]
    fn slugify_is_idempotent() {
        let titles = [
            "My Startup! Story",
            "  --Leading and trailing--  ",
            "Ünïcode & Symbols: 100% growth",
            "tabs\tand\nnewlines",
            "",
        ];
        for title in titles {
            let once = text::slugify(title);
            assert_eq!(text::slugify(&once), once, "title: {title:?}");
        }
    }

    #[test]
    fn reading_time_counts_words_outside_tags() {
        let words = std::iter::repeat_n("word", 400)
            .collect::<Vec<_>>()
            .join(" ");
        let html = format!("<article><p class=\"lead\">{words}</p></article>");
        assert_eq!(text::estimate_reading_time(&html), 2);
    }

    #[test]
    fn reading_time_has_a_one_minute_floor() {
        assert_eq!(text::estimate_reading_time("<p>word</p>"), 1);
        assert_eq!(text::estimate_reading_time(""), 1);
    }

    #[test]
    fn reading_time_rounds_up() {
        let words = std::iter::repeat_n("word", 201)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(text::estimate_reading_time(&words), 2);
    }

    #[test]
    fn parse_tags_trims_and_filters_empty() {
        let tags = text::parse_tags(" startup, growth, ,marketing ,,");
        assert_eq!(
            tags,
            vec!["startup".to_string(), "growth".to_string(), "marketing".to_string()]
        );
    }
}
