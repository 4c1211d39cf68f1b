//! Auth Page
//!
//! Login and signup forms inside the split-screen auth layout. Both go
//! through the context's `Authenticator`; a successful attempt stores the
//! session, toasts, and moves on to the dashboard after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::auth::{Credentials, SignupRequest};
use crate::context::{use_app_context, use_toast};
use crate::store::{store_sign_in, use_app_store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

#[component]
fn AuthLayout(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="auth-layout">
            <div class="auth-hero">
                <img src="/placeholder.svg" alt="Creative Designer" />
                <div class="auth-hero-shade"></div>
            </div>
            <div class="auth-panel">
                <div class="auth-inner">
                    <div class="auth-brand">
                        <img src="/logo.svg" alt=ctx.config.app_name.clone() />
                        <p class="muted">"Transform your ideas with AI-powered creativity"</p>
                    </div>
                    <div class="auth-card">{children()}</div>
                    <p class="auth-footer muted">"Empowering creators with intelligent design tools"</p>
                </div>
            </div>
        </div>
    }
}

/// Password input with a show/hide button
#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <div class="input-with-action">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="input-action"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
        </div>
    }
}

/// Wait out the configured delay, then open the dashboard.
async fn redirect_after_delay(navigate: impl Fn(&str, NavigateOptions), delay_ms: u32) {
    TimeoutFuture::new(delay_ms).await;
    navigate("/dashboard", Default::default());
}

#[component]
fn LoginForm(on_switch: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toast = use_toast();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let delay = ctx.config.login_redirect_delay_ms;
    let authenticator = ctx.authenticator.clone();
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let authenticator = authenticator.clone();
        let navigate = navigate.clone();
        set_loading.set(true);

        spawn_local(async move {
            match authenticator.authenticate(&credentials).await {
                Ok(session) => {
                    tracing::info!(email = %session.email, "login succeeded");
                    store_sign_in(&store, session);
                    toast.success("Login successful! Welcome back!");
                    set_loading.set(false);
                    redirect_after_delay(navigate, delay).await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login rejected");
                    toast.error(err.to_string());
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-form">
            <div class="auth-heading">
                <h2>"Welcome Back"</h2>
                <p class="muted">"Sign in to your creative workspace"</p>
            </div>

            <form on:submit=on_submit>
                <div class="form-field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <PasswordField
                    id="password"
                    label="Password"
                    placeholder="Enter your password"
                    value=password
                />

                <div class="form-row between">
                    <label class="checkbox">
                        <input id="remember" type="checkbox" />
                        <span class="muted">"Remember me"</span>
                    </label>
                    <button type="button" class="link-btn">"Forgot password?"</button>
                </div>

                <button type="submit" class="btn primary block" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                </button>
            </form>

            <p class="auth-switch muted">
                "Don't have an account? "
                <button class="link-btn" on:click=move |_| on_switch.run(())>"Sign up"</button>
            </p>
        </div>
    }
}

#[component]
fn SignupForm(on_switch: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (accepted_terms, set_accepted_terms) = signal(false);
    let (loading, set_loading) = signal(false);
    let delay = ctx.config.login_redirect_delay_ms;
    let authenticator = ctx.authenticator.clone();
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = SignupRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        };
        let authenticator = authenticator.clone();
        let navigate = navigate.clone();
        set_loading.set(true);

        spawn_local(async move {
            match authenticator.register(&request).await {
                Ok(session) => {
                    tracing::info!(email = %session.email, "account created");
                    store_sign_in(&store, session);
                    toast.success("Account created! Welcome aboard!");
                    set_loading.set(false);
                    redirect_after_delay(navigate, delay).await;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "signup rejected");
                    toast.error(err.to_string());
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-form">
            <div class="auth-heading">
                <h2>"Create Account"</h2>
                <p class="muted">"Join the creative revolution"</p>
            </div>

            <form on:submit=on_submit>
                <div class="form-field">
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <PasswordField
                    id="signup-password"
                    label="Password"
                    placeholder="Create a password"
                    value=password
                />
                <PasswordField
                    id="confirm-password"
                    label="Confirm Password"
                    placeholder="Confirm your password"
                    value=confirm_password
                />

                <label class="checkbox">
                    <input
                        id="terms"
                        type="checkbox"
                        prop:checked=move || accepted_terms.get()
                        on:change=move |ev| set_accepted_terms.set(event_target_checked(&ev))
                    />
                    <span class="muted">
                        "I agree to the " <a href="#" class="link">"Terms of Service"</a>
                        " and " <a href="#" class="link">"Privacy Policy"</a>
                    </span>
                </label>

                <button type="submit" class="btn primary block" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                </button>
            </form>

            <p class="auth-switch muted">
                "Already have an account? "
                <button class="link-btn" on:click=move |_| on_switch.run(())>"Sign in"</button>
            </p>
        </div>
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::Login);
    let to_signup = Callback::new(move |_: ()| set_mode.set(AuthMode::Signup));
    let to_login = Callback::new(move |_: ()| set_mode.set(AuthMode::Login));

    view! {
        <AuthLayout>
            {move || match mode.get() {
                AuthMode::Login => view! { <LoginForm on_switch=to_signup /> }.into_any(),
                AuthMode::Signup => view! { <SignupForm on_switch=to_login /> }.into_any(),
            }}
        </AuthLayout>
    }
}
