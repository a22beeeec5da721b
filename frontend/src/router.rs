use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/case-studies")]
    CaseStudies,

    #[at("/case-studies/:id")]
    CaseStudyDetail { id: String },

    #[at("/case-studies/:id/edit")]
    EditCaseStudy { id: String },

    #[at("/category/:category_name")]
    Category { category_name: String },

    #[at("/write")]
    Write,

    #[at("/profile")]
    Profile,

    #[at("/login")]
    Login,

    #[at("/signup")]
    Signup,

    #[at("/dashboard")]
    Dashboard,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::CaseStudies => html! { <pages::case_studies::CaseStudiesPage /> },
        Route::CaseStudyDetail {
            id,
        } => {
            html! { <pages::case_study_detail::CaseStudyDetailPage id={id} /> }
        },
        Route::EditCaseStudy {
            id,
        } => {
            html! { <pages::edit_case_study::EditCaseStudyPage id={id} /> }
        },
        Route::Category {
            category_name,
        } => {
            html! { <pages::category::CategoryPage category_name={category_name} /> }
        },
        Route::Write => html! { <pages::write::WritePage /> },
        Route::Profile => html! { <pages::profile::ProfilePage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Signup => html! { <pages::signup::SignupPage /> },
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white flex flex-col">
                <Header />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
