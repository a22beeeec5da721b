//! Data models and browser-independent logic shared by the StartupStories
//! frontend: row types for the hosted backend tables, query building, text
//! helpers and the small view-state rules the pages rely on.

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod config;
pub mod error;
pub mod query;
pub mod text;
pub mod view;

pub use error::{BackendError, ConfigError};

/// Table names exposed by the backend REST endpoint.
pub mod tables {
    /// Public user profiles, keyed by auth user id.
    pub const PROFILES: &str = "profiles";
    /// Static category reference data.
    pub const CATEGORIES: &str = "categories";
    /// Authored articles.
    pub const CASE_STUDIES: &str = "case_studies";
    /// User/case-study favorite joins.
    pub const FAVORITES: &str = "favorites";
}

/// Public profile row; `id` matches the auth user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Auth user id.
    pub id: String,
    /// Unique public handle.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Free-form about text.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Personal or company site.
    #[serde(default)]
    pub website: Option<String>,
    /// Handle, with or without a leading `@`.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Full URL or bare `linkedin.com/in/...` path.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last save timestamp.
    #[serde(default)]
    pub updated_at: String,
}

impl Profile {
    /// Name shown next to authored content: full name, else username.
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref()).unwrap_or(self.username.as_str())
    }

    /// Merge a saved update into the locally held row.
    pub fn apply_update(&mut self, update: &ProfileUpdate) {
        self.username = update.username.clone();
        self.full_name = update.full_name.clone();
        self.bio = update.bio.clone();
        self.website = update.website.clone();
        self.twitter = update.twitter.clone();
        self.linkedin = update.linkedin.clone();
        self.updated_at = update.updated_at.clone();
    }

    /// Row to show after a successful save. Without a previously loaded row,
    /// one is built from `id` and the saved fields.
    pub fn after_save(current: Option<Profile>, id: &str, update: &ProfileUpdate) -> Profile {
        let mut profile = current.unwrap_or_else(|| Profile {
            id: id.to_string(),
            username: String::new(),
            full_name: None,
            bio: None,
            avatar_url: None,
            website: None,
            twitter: None,
            linkedin: None,
            created_at: String::new(),
            updated_at: String::new(),
        });
        profile.apply_update(update);
        profile
    }
}

/// Row inserted right after signup when the backend hands back a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfile {
    /// Auth user id of the new account.
    pub id: String,
    /// Handle given at signup.
    pub username: String,
    /// Name given at signup, if any.
    pub full_name: Option<String>,
}

/// Editable profile fields, sent as one PATCH.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    /// Trimmed handle.
    pub username: String,
    /// `None` clears the field.
    pub full_name: Option<String>,
    /// `None` clears the field.
    pub bio: Option<String>,
    /// `None` clears the field.
    pub website: Option<String>,
    /// `None` clears the field.
    pub twitter: Option<String>,
    /// `None` clears the field.
    pub linkedin: Option<String>,
    /// Client timestamp, ISO-8601.
    pub updated_at: String,
}

/// Category reference data. Not mutated by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Row id.
    pub id: String,
    /// Display name; also the route segment, lowercased.
    pub name: String,
    /// Short blurb for the category tile.
    #[serde(default)]
    pub description: Option<String>,
    /// CSS color used for the category pill.
    pub color: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Category {
    /// Path segment used by `/category/:category_name` links.
    pub fn route_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Author profile embedded into a case study row (`author:profiles(*)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Profile id.
    #[serde(default)]
    pub id: Option<String>,
    /// Public handle.
    #[serde(default)]
    pub username: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl AuthorSummary {
    /// Full name, falling back to the username, then to a placeholder.
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref())
            .or_else(|| non_blank(self.username.as_deref()))
            .unwrap_or("Anonymous")
    }
}

/// Category embedded into a case study row (`category:categories(*)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Pill color.
    pub color: String,
}

/// Case study row, optionally with its author and category embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Row id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Derived from the title at creation; unique.
    pub slug: String,
    /// Teaser shown on cards.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Body as HTML.
    #[serde(default)]
    pub content: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Id of the owning profile.
    pub author_id: String,
    /// Optional category.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Drafts are only listed on the author's dashboard.
    #[serde(default)]
    pub published: bool,
    /// View counter maintained by the backend.
    #[serde(default)]
    pub views: u64,
    /// Minutes, at least 1.
    #[serde(default = "default_reading_time")]
    pub reading_time: u32,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last edit timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Present when the read embedded `author:profiles(*)`.
    #[serde(default)]
    pub author: Option<AuthorSummary>,
    /// Present when the read embedded `category:categories(*)`.
    #[serde(default)]
    pub category: Option<CategorySummary>,
}

fn default_reading_time() -> u32 {
    1
}

/// Insert payload built by the write page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCaseStudy {
    /// Trimmed title.
    pub title: String,
    /// Slug of the untrimmed title.
    pub slug: String,
    /// `None` when blank.
    pub excerpt: Option<String>,
    /// Trimmed HTML body.
    pub content: String,
    /// `None` when blank.
    pub cover_image: Option<String>,
    /// Signed-in user.
    pub author_id: String,
    /// `None` when unselected.
    pub category_id: Option<String>,
    /// Parsed tag list.
    pub tags: Vec<String>,
    /// Chosen by the submit button.
    pub published: bool,
    /// Estimated minutes.
    pub reading_time: u32,
}

/// Raw form input of the write page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseStudyDraft {
    /// Title as typed.
    pub title: String,
    /// Excerpt as typed.
    pub excerpt: String,
    /// HTML as typed.
    pub content: String,
    /// Cover URL as typed.
    pub cover_image: String,
    /// Selected option value; empty means none.
    pub category_id: String,
    /// Comma separated.
    pub tags: String,
}

impl CaseStudyDraft {
    /// Title and content are the only required fields.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Derive slug, reading time and tag list and build the insert payload.
    pub fn into_new_case_study(self, author_id: &str, published: bool) -> NewCaseStudy {
        let slug = text::slugify(&self.title);
        let reading_time = text::estimate_reading_time(&self.content);
        let tags = text::parse_tags(&self.tags);
        NewCaseStudy {
            title: self.title.trim().to_string(),
            slug,
            excerpt: non_blank_owned(&self.excerpt),
            content: self.content.trim().to_string(),
            cover_image: non_blank_owned(&self.cover_image),
            author_id: author_id.to_string(),
            category_id: non_blank_owned(&self.category_id),
            tags,
            published,
            reading_time,
        }
    }
}

/// Patch payload of the edit page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseStudyUpdate {
    /// New title.
    pub title: String,
    /// New HTML body.
    pub content: String,
    /// Recomputed from `content`.
    pub reading_time: u32,
    /// Client timestamp, ISO-8601.
    pub updated_at: String,
}

impl CaseStudyUpdate {
    /// Build the patch, recomputing the reading time from the new content.
    pub fn new(title: &str, content: &str, updated_at: String) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            reading_time: text::estimate_reading_time(content),
            updated_at,
        }
    }
}

/// Favorite join row. Read-only from the application's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Row id.
    pub id: String,
    /// Profile that favorited.
    pub user_id: String,
    /// Favorited case study.
    pub case_study_id: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Trimmed copy of `value`, or `None` when it is blank.
pub fn non_blank_owned(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_study_row_decodes_with_embeddings() {
        let raw = r##"{
            "id": "cs-1",
            "title": "From Garage to IPO",
            "slug": "from-garage-to-ipo",
            "excerpt": null,
            "content": "<p>hello</p>",
            "cover_image": null,
            "author_id": "user-1",
            "category_id": "cat-1",
            "tags": ["growth"],
            "published": true,
            "views": 42,
            "reading_time": 3,
            "created_at": "2024-03-05T10:00:00+00:00",
            "updated_at": "2024-03-05T10:00:00+00:00",
            "author": {"id": "user-1", "username": "ada", "full_name": null, "avatar_url": null},
            "category": {"id": "cat-1", "name": "SaaS", "color": "#3B82F6", "description": "x"}
        }"##;
        let row: CaseStudy = serde_json::from_str(raw).expect("decode case study");
        assert_eq!(row.views, 42);
        assert_eq!(row.author.as_ref().map(AuthorSummary::display_name), Some("ada"));
        assert_eq!(row.category.map(|c| c.name), Some("SaaS".to_string()));
    }

    #[test]
    fn draft_builds_insert_payload() {
        let draft = CaseStudyDraft {
            title: "  My Startup! Story ".to_string(),
            excerpt: "   ".to_string(),
            content: "<p>one two three</p>".to_string(),
            cover_image: String::new(),
            category_id: "cat-9".to_string(),
            tags: "saas, growth,,".to_string(),
        };
        assert!(draft.is_complete());

        let payload = draft.into_new_case_study("user-1", true);
        assert_eq!(payload.title, "My Startup! Story");
        assert_eq!(payload.slug, "-my-startup-story-");
        assert_eq!(payload.excerpt, None);
        assert_eq!(payload.cover_image, None);
        assert_eq!(payload.category_id.as_deref(), Some("cat-9"));
        assert_eq!(payload.tags, vec!["saas".to_string(), "growth".to_string()]);
        assert_eq!(payload.reading_time, 1);
        assert!(payload.published);
    }

    #[test]
    fn draft_requires_title_and_content() {
        let draft = CaseStudyDraft {
            title: "Title".to_string(),
            content: "  ".to_string(),
            ..Default::default()
        };
        assert!(!draft.is_complete());
    }

    #[test]
    fn profile_update_merges_into_row() {
        let mut profile = Profile {
            id: "user-1".to_string(),
            username: "ada".to_string(),
            full_name: None,
            bio: None,
            avatar_url: Some("https://cdn.example/ada.png".to_string()),
            website: None,
            twitter: None,
            linkedin: None,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let update = ProfileUpdate {
            username: "ada_l".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            bio: Some("Analyst".to_string()),
            updated_at: "2024-02-01T00:00:00.000Z".to_string(),
            ..Default::default()
        };

        profile.apply_update(&update);

        assert_eq!(profile.username, "ada_l");
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example/ada.png"));
        assert_eq!(profile.updated_at, "2024-02-01T00:00:00.000Z");
    }

    #[test]
    fn save_without_loaded_profile_builds_row_from_form() {
        let update = ProfileUpdate {
            username: "grace".to_string(),
            full_name: Some("Grace Hopper".to_string()),
            twitter: Some("@grace".to_string()),
            updated_at: "2024-02-01T00:00:00.000Z".to_string(),
            ..Default::default()
        };

        let profile = Profile::after_save(None, "user-2", &update);

        assert_eq!(profile.id, "user-2");
        assert_eq!(profile.display_name(), "Grace Hopper");
        assert_eq!(profile.twitter.as_deref(), Some("@grace"));
        assert_eq!(profile.avatar_url, None);
        assert_eq!(profile.updated_at, "2024-02-01T00:00:00.000Z");
    }
}
