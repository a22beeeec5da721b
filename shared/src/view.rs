//! Rendering decisions that do not need a browser: which grid variant to show,
//! which category a route names, whether the viewer owns a row, dashboard
//! totals, profile form state and the header's user-menu state.

use crate::{auth::AuthUser, non_blank_owned, CaseStudy, Category, Profile, ProfileUpdate};

/// Placeholder cards rendered while a list is loading.
pub const SKELETON_CARD_COUNT: usize = 6;
/// Rows listed under "Recent Case Studies" on the dashboard.
pub const DASHBOARD_RECENT_LIMIT: usize = 5;
/// Rows shown in the home page's featured section.
pub const FEATURED_LIMIT: usize = 6;

/// What a case study grid renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridState {
    /// Placeholder cards, this many.
    Skeleton(usize),
    /// The "No case studies found." message.
    Empty,
    /// One card per row.
    Cards,
}

/// Skeleton while loading, the empty message when there is nothing to show.
pub fn grid_state(loading: bool, item_count: usize) -> GridState {
    if loading {
        GridState::Skeleton(SKELETON_CARD_COUNT)
    } else if item_count == 0 {
        GridState::Empty
    } else {
        GridState::Cards
    }
}

/// Find the category a `/category/:name` route refers to, ignoring case.
pub fn resolve_category<'a>(categories: &'a [Category], route_name: &str) -> Option<&'a Category> {
    let wanted = route_name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    categories
        .iter()
        .find(|category| category.name.trim().to_lowercase() == wanted)
}

/// UI gate only; the backend enforces the real rule.
pub fn is_author(user: Option<&AuthUser>, case_study: &CaseStudy) -> bool {
    user.is_some_and(|user| user.id == case_study.author_id)
}

/// Outcome of opening the edit page for a fetched row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccess {
    /// Show the form.
    Allowed,
    /// Send the viewer back to the list.
    Redirect,
}

/// Only the author may open the edit form.
pub fn edit_access(user: Option<&AuthUser>, case_study: &CaseStudy) -> EditAccess {
    if is_author(user, case_study) {
        EditAccess::Allowed
    } else {
        EditAccess::Redirect
    }
}

/// Recent entry listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCaseStudy {
    /// Row id, for the edit link.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Raw timestamp.
    pub created_at: String,
    /// View count.
    pub views: u64,
    /// False for drafts.
    pub published: bool,
}

/// Author totals shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Drafts included.
    pub total_case_studies: usize,
    /// Sum over all rows.
    pub total_views: u64,
    /// Newest rows, at most five.
    pub recent: Vec<RecentCaseStudy>,
}

impl DashboardStats {
    /// `rows` are expected newest first, as the dashboard query orders them.
    pub fn from_case_studies(rows: &[CaseStudy]) -> Self {
        Self {
            total_case_studies: rows.len(),
            total_views: rows.iter().map(|row| row.views).sum(),
            recent: rows
                .iter()
                .take(DASHBOARD_RECENT_LIMIT)
                .map(|row| RecentCaseStudy {
                    id: row.id.clone(),
                    title: row.title.clone(),
                    created_at: row.created_at.clone(),
                    views: row.views,
                    published: row.published,
                })
                .collect(),
        }
    }
}

/// Open/closed state of the header's user menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserMenu {
    /// Whether the dropdown is shown.
    pub open: bool,
}

/// Events the user menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    /// Avatar button clicked.
    Toggle,
    /// A menu entry was chosen.
    Close,
    /// A pointer went down somewhere on the page.
    PointerDown {
        /// Whether it landed inside the menu element.
        inside: bool,
    },
}

impl UserMenu {
    /// Next state after `action`. Outside pointer-downs close the menu.
    pub fn apply(self, action: UserMenuAction) -> Self {
        let open = match action {
            UserMenuAction::Toggle => !self.open,
            UserMenuAction::Close => false,
            UserMenuAction::PointerDown {
                inside,
            } => self.open && inside,
        };
        Self {
            open,
        }
    }
}

/// Editable copy of a profile. Every field is plain text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Handle.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// About text.
    pub bio: String,
    /// Site URL.
    pub website: String,
    /// Twitter handle.
    pub twitter: String,
    /// LinkedIn URL or path.
    pub linkedin: String,
}

impl ProfileForm {
    /// Seed the form from a stored row; `None` fields become empty text.
    pub fn from_profile(profile: &Profile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            username: profile.username.clone(),
            full_name: text(&profile.full_name),
            bio: text(&profile.bio),
            website: text(&profile.website),
            twitter: text(&profile.twitter),
            linkedin: text(&profile.linkedin),
        }
    }

    /// Blank optional fields are cleared rather than stored as empty strings.
    pub fn to_update(&self, updated_at: String) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.trim().to_string(),
            full_name: non_blank_owned(&self.full_name),
            bio: non_blank_owned(&self.bio),
            website: non_blank_owned(&self.website),
            twitter: non_blank_owned(&self.twitter),
            linkedin: non_blank_owned(&self.linkedin),
            updated_at,
        }
    }
}

/// Profile link for a handle, with or without the leading `@`.
pub fn twitter_url(handle: &str) -> String {
    format!("https://twitter.com/{}", handle.trim().trim_start_matches('@'))
}

/// Accepts a full URL or a bare `linkedin.com/in/...` path.
pub fn linkedin_url(value: &str) -> String {
    let value = value.trim();
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}
