//! Login and sign-up page.
//!
//! A successful response is written to the session first, then the user is
//! sent to the admin or member home by role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::{Credentials, Registration};
use crate::state::session::SessionContext;
use crate::util::auth::home_for_role;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const PASSWORD_MISMATCH: &str = "Passwords don't match";
pub const RESET_COMING_SOON: &str = "Reset password functionality coming soon.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

/// Raw sign-up form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub gamertag: String,
    pub password: String,
    pub confirm: String,
}

/// Check the confirmation field and build the registration payload.
///
/// # Errors
///
/// Returns [`PASSWORD_MISMATCH`] when the two password fields differ.
pub fn validate_signup(form: &SignupForm) -> Result<Registration, &'static str> {
    if form.password != form.confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(Registration {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        gamertag: form.gamertag.trim().to_owned(),
        ..Registration::default()
    })
}

pub fn login_credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let tab = RwSignal::new(AuthTab::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let signup = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = {
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            busy.set(true);
            error.set(String::new());
            let credentials = login_credentials(&email.get(), &password.get());
            let api = api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.auth().login(&credentials).await {
                    Ok(resp) => {
                        session.set_session(&resp.token, &resp.user);
                        navigate(home_for_role(resp.user.role), NavigateOptions::default());
                    }
                    Err(e) => error.set(e.message_or(LOGIN_FAILED)),
                }
                busy.set(false);
            });
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_signup(&signup.get()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.auth().register(&registration).await {
                Ok(resp) => {
                    session.set_session(&resp.token, &resp.user);
                    navigate(home_for_role(resp.user.role), NavigateOptions::default());
                }
                Err(e) => error.set(e.message_or(REGISTRATION_FAILED)),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&SignupForm) -> String, set: fn(&mut SignupForm, String)| {
        view! {
            <label class="auth-label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || get(&signup.get())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        signup.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="auth-wrapper">
            <div class="auth-card">
                <div class="auth-tabs">
                    <button
                        class="auth-tab"
                        class=("auth-tab--active", move || tab.get() == AuthTab::Login)
                        on:click=move |_| {
                            tab.set(AuthTab::Login);
                            error.set(String::new());
                        }
                    >
                        "Login"
                    </button>
                    <button
                        class="auth-tab"
                        class=("auth-tab--active", move || tab.get() == AuthTab::SignUp)
                        on:click=move |_| {
                            tab.set(AuthTab::SignUp);
                            error.set(String::new());
                        }
                    >
                        "Sign Up"
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error" role="alert">
                        {move || error.get()}
                        <button class="auth-error__close" on:click=move |_| error.set(String::new())>
                            "×"
                        </button>
                    </p>
                </Show>

                <Show
                    when=move || tab.get() == AuthTab::Login
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_signup.clone()>
                                {field("Full Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                                {field("Gamertag", "text", |f| f.gamertag.clone(), |f, v| f.gamertag = v)}
                                {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                                {field("Confirm Password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                                <button class="auth-button auth-button--signup" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_login.clone()>
                        <label class="auth-label">
                            "Email"
                            <input
                                class="auth-input"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-label">
                            "Password"
                            <input
                                class="auth-input"
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="forgot-password-container">
                            <button
                                type="button"
                                class="forgot-password"
                                on:click=move |_| notice.set(RESET_COMING_SOON.to_owned())
                            >
                                "Forgot Password?"
                            </button>
                        </div>
                        <Show when=move || !notice.get().is_empty()>
                            <p class="auth-notice">{move || notice.get()}</p>
                        </Show>
                        <button class="auth-button auth-button--login" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
