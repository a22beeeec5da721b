use std::{
    cell::{OnceCell, RefCell},
    rc::Rc,
};

use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::Date;
use serde::{de::DeserializeOwned, Serialize};
use startup_stories_shared::{
    auth::{PasswordCredentials, Session, SignupRequest, TokenResponse},
    config::BackendConfig,
    query::{self, CaseStudyFilter, TableQuery},
    tables, BackendError, CaseStudy, CaseStudyUpdate, Category, NewCaseStudy, NewProfile,
    Profile, ProfileUpdate,
};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

thread_local! {
    static CLIENT: OnceCell<BackendClient> = const { OnceCell::new() };
}

/// Handle to the hosted backend. Cloning shares the same session token.
#[derive(Clone)]
pub struct BackendClient {
    inner: Rc<ClientInner>,
}

struct ClientInner {
    config: BackendConfig,
    access_token: RefCell<Option<String>>,
}

/// Install the process-wide client. Later calls are ignored.
pub fn install(config: BackendConfig) {
    CLIENT.with(|cell| {
        let _ = cell.set(BackendClient::new(config));
    });
}

pub fn client() -> Result<BackendClient, BackendError> {
    CLIENT
        .with(|cell| cell.get().cloned())
        .ok_or(BackendError::NotConfigured)
}

/// Current time in unix seconds.
pub fn now_secs() -> i64 {
    (Date::now() / 1000.0) as i64
}

/// Current time as an ISO-8601 string, the format the backend stores.
pub fn now_iso() -> String {
    String::from(Date::new_0().to_iso_string())
}

impl BackendClient {
    fn new(config: BackendConfig) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                config,
                access_token: RefCell::new(None),
            }),
        }
    }

    /// Token sent as bearer on subsequent requests; `None` falls back to the
    /// anon key.
    pub fn set_access_token(&self, token: Option<String>) {
        *self.inner.access_token.borrow_mut() = token;
    }

    fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .inner
            .access_token
            .borrow()
            .clone()
            .unwrap_or_else(|| self.config().anon_key().to_string());
        builder
            .header("apikey", self.config().anon_key())
            .header("Authorization", &format!("Bearer {bearer}"))
    }

    fn table_url(&self, query: &TableQuery) -> String {
        let base = self.config().rest_url(query.table());
        let params = query.to_query_string();
        if params.is_empty() {
            base
        } else {
            format!("{base}?{params}")
        }
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .authorize(Request::get(&self.table_url(query)))
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        decode(response).await
    }

    /// Exactly one row; zero or several rows map to [`BackendError::NotFound`].
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<T, BackendError> {
        let response = self
            .authorize(Request::get(&self.table_url(query)))
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        decode(response).await
    }

    /// Insert one row and return it as stored.
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, BackendError> {
        let request = self
            .authorize(Request::post(&self.config().rest_url(table)))
            .header("Accept", SINGLE_OBJECT)
            .header("Prefer", "return=representation")
            .json(row)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        decode(response).await
    }

    pub async fn insert_minimal<B: Serialize>(&self, table: &str, row: &B) -> Result<(), BackendError> {
        let request = self
            .authorize(Request::post(&self.config().rest_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        Ok(())
    }

    /// PATCH the row with `id`. Last writer wins.
    pub async fn update_by_id<B: Serialize>(
        &self,
        table: &'static str,
        id: &str,
        patch: &B,
    ) -> Result<(), BackendError> {
        let url = self.table_url(&TableQuery::new(table).eq("id", id));
        let request = self
            .authorize(Request::patch(&url))
            .header("Prefer", "return=minimal")
            .json(patch)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        Ok(())
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &PasswordCredentials,
    ) -> Result<Session, BackendError> {
        let request = Request::post(&self.config().auth_url("token?grant_type=password"))
            .header("apikey", self.config().anon_key())
            .json(credentials)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        let grant: TokenResponse = decode(response).await?;
        grant
            .into_session(now_secs())
            .ok_or_else(|| BackendError::Decode("token grant without session".to_string()))
    }

    /// `Ok(None)` when the account still needs email confirmation.
    pub async fn sign_up(&self, signup: &SignupRequest) -> Result<Option<Session>, BackendError> {
        let request = Request::post(&self.config().auth_url("signup"))
            .header("apikey", self.config().anon_key())
            .json(signup)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        let grant: TokenResponse = decode(response).await?;
        Ok(grant.into_session(now_secs()))
    }

    pub async fn sign_out(&self) -> Result<(), BackendError> {
        let response = self
            .authorize(Request::post(&self.config().auth_url("logout")))
            .send()
            .await
            .map_err(network_error)?;
        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        Ok(())
    }
}

fn network_error(err: gloo_net::Error) -> BackendError {
    BackendError::Network(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

async fn error_from_response(response: Response, single: bool) -> BackendError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    BackendError::from_response(status, &body, single)
}

/// Case studies matching `filter`.
pub async fn fetch_case_studies(filter: &CaseStudyFilter) -> Result<Vec<CaseStudy>, BackendError> {
    client()?.select(&filter.to_query()).await
}

/// One case study with its author embedded.
pub async fn fetch_case_study(id: &str) -> Result<CaseStudy, BackendError> {
    client()?.select_single(&query::case_study_by_id(id)).await
}

pub async fn create_case_study(row: &NewCaseStudy) -> Result<CaseStudy, BackendError> {
    client()?.insert(tables::CASE_STUDIES, row).await
}

pub async fn update_case_study(id: &str, patch: &CaseStudyUpdate) -> Result<(), BackendError> {
    client()?
        .update_by_id(tables::CASE_STUDIES, id, patch)
        .await
}

/// All categories, alphabetically.
pub async fn fetch_categories() -> Result<Vec<Category>, BackendError> {
    client()?.select(&query::categories_by_name()).await
}

pub async fn fetch_profile(user_id: &str) -> Result<Profile, BackendError> {
    client()?
        .select_single(&query::profile_by_id(user_id))
        .await
}

pub async fn update_profile(user_id: &str, patch: &ProfileUpdate) -> Result<(), BackendError> {
    client()?
        .update_by_id(tables::PROFILES, user_id, patch)
        .await
}

pub async fn create_profile(row: &NewProfile) -> Result<(), BackendError> {
    client()?.insert_minimal(tables::PROFILES, row).await
}
