#![allow(dead_code, reason = "shared wording table; not every string is rendered")]

pub mod common {
    pub const BRAND_NAME: &str = "StartupStories";
}

pub mod header {
    pub const BRAND_NAME: &str = super::common::BRAND_NAME;
    pub const SEARCH_PLACEHOLDER: &str = "Search case studies...";
    pub const SEARCH_ARIA: &str = "Search case studies";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
    pub const NAV_CASE_STUDIES: &str = "Case Studies";
    pub const NAV_WRITE: &str = "Write";
    pub const USER_MENU_ARIA: &str = "Account menu";
    pub const MENU_PROFILE: &str = "Profile";
    pub const MENU_DASHBOARD: &str = "Dashboard";
    pub const MENU_SIGN_OUT: &str = "Sign Out";
    pub const SIGN_IN: &str = "Sign In";
    pub const GET_STARTED: &str = "Get Started";
}

pub mod footer {
    pub const BRAND_NAME: &str = super::common::BRAND_NAME;
    pub const NAV_ARIA: &str = "Footer navigation";
    pub const CASE_STUDIES: &str = "Case Studies";
    pub const SHARE_STORY: &str = "Share Your Story";
    pub const TAGLINE: &str = "Real journeys from real founders.";
}

pub mod loading_spinner {
    pub const LOADING: &str = "Loading...";
}

pub mod error_banner {
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod case_study_card {
    pub const MINUTES_SUFFIX: &str = "min";
    pub const FAVORITE_ARIA: &str = "Toggle favorite";
}

pub mod case_study_grid {
    pub const EMPTY: &str = "No case studies found.";
}

pub mod home {
    pub const HERO_TITLE_PREFIX: &str = "Discover Inspiring";
    pub const HERO_TITLE_HIGHLIGHT: &str = " Startup Stories";
    pub const HERO_SUBTITLE: &str = "Learn from the journeys of successful entrepreneurs. Read detailed case \
                                     studies, discover growth strategies, and get inspired by real startup \
                                     stories.";
    pub const HERO_START_READING: &str = "Start Reading";
    pub const HERO_SHARE_STORY: &str = "Share Your Story";
    pub const STAT_CASE_STUDIES_VALUE: &str = "500+";
    pub const STAT_CASE_STUDIES_LABEL: &str = "Case Studies";
    pub const STAT_FOUNDERS_VALUE: &str = "10K+";
    pub const STAT_FOUNDERS_LABEL: &str = "Entrepreneurs";
    pub const STAT_FUNDING_VALUE: &str = "$2B+";
    pub const STAT_FUNDING_LABEL: &str = "Funding Raised";
    pub const CATEGORIES_TITLE: &str = "Explore by Category";
    pub const CATEGORIES_SUBTITLE: &str =
        "Dive into specific industries and discover the strategies that drive success";
    pub const FEATURED_TITLE: &str = "Featured Stories";
    pub const FEATURED_SUBTITLE: &str = "Most popular case studies from our community";
    pub const VIEW_ALL: &str = "View All";
    pub const CTA_TITLE: &str = "Ready to Share Your Startup Journey?";
    pub const CTA_SUBTITLE: &str =
        "Join thousands of entrepreneurs sharing their stories and insights with the community.";
    pub const CTA_BUTTON: &str = "Get Started Today";
}

pub mod case_studies {
    pub const TITLE: &str = "Case Studies";
    pub const SUBTITLE: &str =
        "Discover inspiring startup stories and learn from successful entrepreneurs";
    pub const SEARCH_PLACEHOLDER: &str = "Search case studies...";
    pub const CATEGORY_ARIA: &str = "Filter by category";
    pub const ALL_CATEGORIES: &str = "All Categories";
    pub const SORT_ARIA: &str = "Sort case studies";
}

pub mod category {
    pub const NOT_FOUND_TITLE: &str = "Category Not Found";
    pub const NOT_FOUND_BODY: &str = "The category you're looking for doesn't exist.";
    pub const COUNT_TEMPLATE: &str = "{} Case Studies";
}

pub mod case_study_detail {
    pub const NOT_FOUND: &str = "Case study not found";
    pub const ANONYMOUS: &str = "Anonymous";
    pub const BYLINE_TEMPLATE: &str = "By {}";
    pub const READING_TIME_TEMPLATE: &str = "{} min read";
    pub const EDIT_BUTTON: &str = "Edit Case Study";
}

pub mod edit_case_study {
    pub const TITLE: &str = "Edit Case Study";
    pub const TITLE_LABEL: &str = "Title";
    pub const CONTENT_LABEL: &str = "Content";
    pub const SAVE: &str = "Save Changes";
    pub const SAVING: &str = "Saving...";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE_FAILED: &str = "Failed to update case study. Please try again.";
}

pub mod write {
    pub const TITLE: &str = "Write Your Case Study";
    pub const SAVE_DRAFT: &str = "Save Draft";
    pub const PUBLISH: &str = "Publish";
    pub const TITLE_LABEL: &str = "Title *";
    pub const TITLE_PLACEHOLDER: &str = "Enter an engaging title for your case study";
    pub const EXCERPT_LABEL: &str = "Excerpt";
    pub const EXCERPT_PLACEHOLDER: &str = "Write a brief summary of your case study";
    pub const COVER_LABEL: &str = "Cover Image URL";
    pub const COVER_PREVIEW_ALT: &str = "Cover preview";
    pub const CATEGORY_LABEL: &str = "Category";
    pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
    pub const TAGS_LABEL: &str = "Tags";
    pub const TAGS_PLACEHOLDER: &str = "startup, growth, marketing (comma separated)";
    pub const CONTENT_LABEL: &str = "Content * (HTML)";
    pub const CONTENT_PLACEHOLDER: &str =
        "Tell your startup story. Share the challenges, victories, and lessons learned...";
    pub const MISSING_FIELDS: &str = "Please fill in the title and content";
    pub const SAVE_FAILED_TEMPLATE: &str = "Error saving case study: {}";
}

pub mod profile {
    pub const LOADING: &str = "Loading profile...";
    pub const EDIT: &str = "Edit Profile";
    pub const CANCEL: &str = "Cancel";
    pub const SAVE: &str = "Save";
    pub const SAVING: &str = "Saving...";
    pub const FULL_NAME_LABEL: &str = "Full Name";
    pub const USERNAME_LABEL: &str = "Username";
    pub const BIO_LABEL: &str = "Bio";
    pub const BIO_PLACEHOLDER: &str = "Tell us about yourself...";
    pub const WEBSITE_LABEL: &str = "Website";
    pub const TWITTER_LABEL: &str = "Twitter";
    pub const LINKEDIN_LABEL: &str = "LinkedIn";
    pub const SAVE_FAILED_TEMPLATE: &str = "Error updating profile: {}";
}

pub mod dashboard {
    pub const TITLE: &str = "Dashboard";
    pub const WRITE_NEW: &str = "Write New Case Study";
    pub const TOTAL_CASE_STUDIES: &str = "Total Case Studies";
    pub const TOTAL_VIEWS: &str = "Total Views";
    pub const RECENT_TITLE: &str = "Recent Case Studies";
    pub const EMPTY: &str = "No case studies yet. Start writing your first case study!";
    pub const DRAFT_BADGE: &str = "Draft";
    pub const VIEWS_TEMPLATE: &str = "{} views";
}

pub mod login {
    pub const TITLE: &str = "Welcome back";
    pub const SUBTITLE: &str = "Sign in to write and manage your case studies.";
    pub const EMAIL_LABEL: &str = "Email";
    pub const PASSWORD_LABEL: &str = "Password";
    pub const SUBMIT: &str = "Sign In";
    pub const SUBMITTING: &str = "Signing in...";
    pub const NO_ACCOUNT: &str = "Don't have an account?";
    pub const SIGNUP_LINK: &str = "Sign up";
}

pub mod signup {
    pub const TITLE: &str = "Create your account";
    pub const SUBTITLE: &str = "Join the community and share your startup story.";
    pub const USERNAME_LABEL: &str = "Username";
    pub const FULL_NAME_LABEL: &str = "Full Name";
    pub const EMAIL_LABEL: &str = "Email";
    pub const PASSWORD_LABEL: &str = "Password";
    pub const SUBMIT: &str = "Create Account";
    pub const SUBMITTING: &str = "Creating account...";
    pub const USERNAME_REQUIRED: &str = "Please choose a username.";
    pub const CHECK_EMAIL: &str = "Check your inbox to confirm your email, then sign in.";
    pub const HAVE_ACCOUNT: &str = "Already have an account?";
    pub const LOGIN_LINK: &str = "Sign in";
}

pub mod not_found {
    pub const TITLE: &str = "Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to Home";
}

pub mod config_error {
    pub const TITLE: &str = "StartupStories is not configured";
    pub const HINT: &str = "Set these variables when building the app:";
}
