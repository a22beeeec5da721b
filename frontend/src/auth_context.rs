use std::rc::Rc;

use startup_stories_shared::{
    auth::{AuthUser, PasswordCredentials, Session, SignupMetadata, SignupRequest},
    non_blank_owned, BackendError, NewProfile,
};
use web_sys::{console, window};
use yew::prelude::*;

use crate::api;

const SESSION_STORAGE_KEY: &str = "startup-stories:auth:session";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|session| &session.user)
    }
}

pub enum AuthAction {
    SignedIn(Session),
    SignedOut,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            AuthAction::SignedIn(session) => Some(session),
            AuthAction::SignedOut => None,
        };
        Rc::new(AuthState {
            session,
        })
    }
}

pub type AuthContext = UseReducerHandle<AuthState>;

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(|| {
        let session = restore_session();
        if let (Some(session), Ok(client)) = (session.as_ref(), api::client()) {
            client.set_access_token(Some(session.access_token.clone()));
        }
        AuthState {
            session,
        }
    });

    html! {
        <ContextProvider<AuthContext> context={state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Fields collected by the signup form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub username: String,
    pub full_name: String,
}

/// Whether signup produced a usable session right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    SignedIn,
    ConfirmationPending,
}

pub async fn sign_in(auth: &AuthContext, email: &str, password: &str) -> Result<(), BackendError> {
    let client = api::client()?;
    let session = client
        .sign_in_with_password(&PasswordCredentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
        .await?;
    establish(auth, &client, session);
    Ok(())
}

/// Create the account, then the matching profile row when a session came
/// back immediately.
pub async fn sign_up(auth: &AuthContext, form: SignupForm) -> Result<SignupOutcome, BackendError> {
    let client = api::client()?;
    let username = form.username.trim().to_string();
    let full_name = non_blank_owned(&form.full_name);
    let request = SignupRequest {
        email: form.email.trim().to_string(),
        password: form.password,
        data: SignupMetadata {
            username: username.clone(),
            full_name: full_name.clone(),
        },
    };

    let Some(session) = client.sign_up(&request).await? else {
        return Ok(SignupOutcome::ConfirmationPending);
    };

    let profile = NewProfile {
        id: session.user.id.clone(),
        username,
        full_name,
    };
    establish(auth, &client, session);
    if let Err(e) = api::create_profile(&profile).await {
        console::error_1(&format!("Failed to create profile: {}", e).into());
    }
    Ok(SignupOutcome::SignedIn)
}

/// Failures of the remote call are logged; the local session is dropped
/// either way.
pub async fn sign_out(auth: &AuthContext) {
    match api::client() {
        Ok(client) => {
            if let Err(e) = client.sign_out().await {
                console::error_1(&format!("Failed to sign out: {}", e).into());
            }
            client.set_access_token(None);
        },
        Err(e) => console::error_1(&format!("Failed to sign out: {}", e).into()),
    }
    persist_session(None);
    auth.dispatch(AuthAction::SignedOut);
}

fn establish(auth: &AuthContext, client: &api::BackendClient, session: Session) {
    client.set_access_token(Some(session.access_token.clone()));
    persist_session(Some(&session));
    auth.dispatch(AuthAction::SignedIn(session));
}

fn restore_session() -> Option<Session> {
    let storage = window().and_then(|win| win.local_storage().ok().flatten())?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    let session = match serde_json::from_str::<Session>(&raw) {
        Ok(session) => session,
        Err(e) => {
            console::warn_1(&format!("Discarding unreadable session: {}", e).into());
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            return None;
        },
    };

    if session.is_expired(api::now_secs()) {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
        return None;
    }
    Some(session)
}

fn persist_session(session: Option<&Session>) {
    let Some(storage) = window().and_then(|win| win.local_storage().ok().flatten()) else {
        return;
    };
    match session.map(serde_json::to_string) {
        Some(Ok(raw)) => {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
        },
        Some(Err(e)) => {
            console::error_1(&format!("Failed to persist session: {}", e).into());
        },
        None => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        },
    }
}
