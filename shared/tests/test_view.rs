//! Integration tests: view.
#[cfg(test)]
mod tests {
    use startup_stories_shared::{
        auth::AuthUser,
        view::{
            edit_access, grid_state, is_author, linkedin_url, resolve_category, twitter_url,
            DashboardStats, EditAccess, GridState, ProfileForm, UserMenu, UserMenuAction,
            SKELETON_CARD_COUNT,
        },
        CaseStudy, Category, Profile,
    };

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            color: "#2563EB".to_string(),
            created_at: None,
        }
    }

    fn case_study(id: &str, author_id: &str, views: u64) -> CaseStudy {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Story {id}"),
            "slug": format!("story-{id}"),
            "author_id": author_id,
            "views": views,
            "created_at": "2024-05-01T08:00:00+00:00"
        }))
        .expect("build case study")
    }

    fn user(id: &str) -> AuthUser {
        AuthUser {
            id: id.to_string(),
            email: None,
        }
    }

    #[test]
    fn grid_shows_skeleton_while_loading() {
        assert_eq!(grid_state(true, 0), GridState::Skeleton(SKELETON_CARD_COUNT));
        assert_eq!(grid_state(true, 4), GridState::Skeleton(SKELETON_CARD_COUNT));
    }

    #[test]
    fn grid_shows_empty_state_for_empty_list() {
        assert_eq!(grid_state(false, 0), GridState::Empty);
        assert_eq!(grid_state(false, 2), GridState::Cards);
    }

    #[test]
    fn category_resolution_ignores_case() {
        let categories = vec![category("c1", "FinTech"), category("c2", "Health Care")];
        assert_eq!(resolve_category(&categories, "fintech").map(|c| c.id.as_str()), Some("c1"));
        assert_eq!(
            resolve_category(&categories, "HEALTH CARE").map(|c| c.id.as_str()),
            Some("c2")
        );
    }

    #[test]
    fn unknown_category_is_not_resolved() {
        let categories = vec![category("c1", "FinTech")];
        assert!(resolve_category(&categories, "edtech").is_none());
        assert!(resolve_category(&categories, "  ").is_none());
        assert!(resolve_category(&categories, "fin_ech").is_none());
    }

    #[test]
    fn edit_redirects_when_viewer_is_not_author() {
        let row = case_study("cs-1", "user-1", 0);
        assert_eq!(edit_access(Some(&user("user-1")), &row), EditAccess::Allowed);
        assert_eq!(edit_access(Some(&user("user-2")), &row), EditAccess::Redirect);
        assert_eq!(edit_access(None, &row), EditAccess::Redirect);
        assert!(!is_author(None, &row));
    }

    #[test]
    fn dashboard_totals_and_recent_slice() {
        let rows = (1..=7)
            .map(|i| case_study(&format!("cs-{i}"), "user-1", i * 10))
            .collect::<Vec<_>>();
        let stats = DashboardStats::from_case_studies(&rows);

        assert_eq!(stats.total_case_studies, 7);
        assert_eq!(stats.total_views, 280);
        assert_eq!(stats.recent.len(), 5);
        assert_eq!(stats.recent[0].id, "cs-1");
    }

    #[test]
    fn user_menu_closes_on_outside_pointer_down() {
        let open = UserMenu::default().apply(UserMenuAction::Toggle);
        assert!(open.open);

        assert!(open.apply(UserMenuAction::PointerDown { inside: true }).open);
        assert!(!open.apply(UserMenuAction::PointerDown { inside: false }).open);
    }

    #[test]
    fn outside_pointer_down_does_not_open_a_closed_menu() {
        let closed = UserMenu::default();
        assert!(!closed.apply(UserMenuAction::PointerDown { inside: true }).open);
        assert!(!closed.apply(UserMenuAction::Toggle).apply(UserMenuAction::Close).open);
    }

    #[test]
    fn profile_form_round_trips_through_a_saved_update() {
        let mut profile: Profile = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "username": "ada",
            "full_name": "Ada Lovelace",
            "bio": null,
            "twitter": "@ada",
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }))
        .expect("build profile");

        let mut form = ProfileForm::from_profile(&profile);
        assert_eq!(form.full_name, "Ada Lovelace");
        assert_eq!(form.bio, "");

        form.bio = "Analyst".to_string();
        form.twitter = "  ".to_string();
        let update = form.to_update("2024-02-01T00:00:00Z".to_string());
        assert_eq!(update.twitter, None);

        profile.apply_update(&update);
        assert_eq!(profile.bio.as_deref(), Some("Analyst"));
        assert_eq!(profile.twitter, None);
        assert_eq!(ProfileForm::from_profile(&profile), form_with_cleared_twitter(&form));
    }

    fn form_with_cleared_twitter(form: &ProfileForm) -> ProfileForm {
        ProfileForm {
            twitter: String::new(),
            ..form.clone()
        }
    }

    #[test]
    fn social_links_are_normalized() {
        assert_eq!(twitter_url("@founder"), "https://twitter.com/founder");
        assert_eq!(linkedin_url("linkedin.com/in/founder"), "https://linkedin.com/in/founder");
        assert_eq!(
            linkedin_url("https://www.linkedin.com/in/founder"),
            "https://www.linkedin.com/in/founder"
        );
    }
}
