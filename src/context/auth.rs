// ============================================================================
// AUTH CONTEXT - client-held session (user + bearer token)
// ============================================================================
// Single writer surface: login / register / logout / the startup restore.
// The token is the only thing persisted; the user is re-derived from it
// through /auth/me on reload.
// ============================================================================

use yew::prelude::*;

use crate::context::use_toast;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::ApiClient;
use crate::utils::{read_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_TOKEN};

/// Either fully authenticated (both user and token set) or fully anonymous.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_loading: bool,
}

impl Session {
    fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: false,
        }
    }

    fn restoring() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }

    fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_loading: false,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    pub session: Session,
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be used within an AuthProvider")
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // A stored token means a restore round-trip is about to run; start in
    // the loading state so guards show a spinner instead of redirecting.
    let session = use_state(|| {
        if read_from_storage(STORAGE_KEY_TOKEN).is_some() {
            Session::restoring()
        } else {
            Session::anonymous()
        }
    });
    let toast = use_toast();

    // Re-derive the user from the persisted token on startup. A dead token
    // is removed silently (no toast: the visitor just sees the login page).
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(token) = read_from_storage(STORAGE_KEY_TOKEN) {
                wasm_bindgen_futures::spawn_local(async move {
                    let api = ApiClient::new();
                    match api.current_user().await {
                        Ok(response) => {
                            log::info!("✅ Session restored: {}", response.user.email);
                            session.set(Session::authenticated(response.user.into_user(), token));
                        }
                        Err(e) => {
                            log::warn!("⚠️ Stored token rejected, logging out: {}", e);
                            let _ = remove_from_storage(STORAGE_KEY_TOKEN);
                            session.set(Session::anonymous());
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |request: LoginRequest| {
            let session = session.clone();
            let toast = toast.clone();

            let mut loading = (*session).clone();
            loading.is_loading = true;
            session.set(loading);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.login(&request).await {
                    Ok(response) => {
                        if let Err(e) = save_to_storage(STORAGE_KEY_TOKEN, &response.token) {
                            log::error!("❌ Could not persist token: {}", e);
                        }
                        log::info!("✅ Logged in: {}", response.user.email);
                        session.set(Session::authenticated(
                            response.user.into_user(),
                            response.token,
                        ));
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        let mut unchanged = (*session).clone();
                        unchanged.is_loading = false;
                        session.set(unchanged);
                        toast.error(e.to_string());
                    }
                }
            });
        })
    };

    let register = {
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |request: RegisterRequest| {
            let session = session.clone();
            let toast = toast.clone();

            let mut loading = (*session).clone();
            loading.is_loading = true;
            session.set(loading);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.register(&request).await {
                    Ok(response) => {
                        if let Err(e) = save_to_storage(STORAGE_KEY_TOKEN, &response.token) {
                            log::error!("❌ Could not persist token: {}", e);
                        }
                        log::info!("✅ Registered: {}", response.user.email);
                        session.set(Session::authenticated(
                            response.user.into_user(),
                            response.token,
                        ));
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        let mut unchanged = (*session).clone();
                        unchanged.is_loading = false;
                        session.set(unchanged);
                        toast.error(e.to_string());
                    }
                }
            });
        })
    };

    // No server round-trip: token invalidation is a backend concern.
    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let _ = remove_from_storage(STORAGE_KEY_TOKEN);
            log::info!("👋 Logged out");
            session.set(Session::anonymous());
        })
    };

    let handle = AuthHandle {
        session: (*session).clone(),
        login,
        register,
        logout,
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}
