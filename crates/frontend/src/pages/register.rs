//! Registration page component.

use auth_client::RegistrationForm;
use core_types::Role;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{ErrorBanner, PasswordInput, bind_input};
use crate::services::browser_auth_client;

/// Registration page component.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let role = use_state(|| None::<Role>);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            role.set(Role::parse(&select.value()));
        })
    };

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let role = role.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            error.set(None);

            let form = RegistrationForm {
                username: (*username).clone(),
                email: (*email).clone(),
                role: *role,
                password: (*password).clone(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match browser_auth_client().register(&form).await {
                    Ok(destination) => {
                        log::info!("account created");
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message("Registration successful 🎉");
                        }
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from(destination));
                        }
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <span class="brand-mark">{"P"}</span>
                    <h1>{"Join PresenX"}</h1>
                    <p>{"Create your account"}</p>
                </div>

                <div class="auth-body">
                    <ErrorBanner message={(*error).clone()} />

                    <label class="form-label">{"Username"}</label>
                    <input
                        class="form-input"
                        placeholder="JohnDoe"
                        value={(*username).clone()}
                        oninput={bind_input(&username)}
                        disabled={*loading}
                    />

                    <label class="form-label">{"Email"}</label>
                    <input
                        type="email"
                        class="form-input"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                        disabled={*loading}
                    />

                    <label class="form-label">{"Role"}</label>
                    <select class="form-input" onchange={on_role_change} disabled={*loading}>
                        <option value="" selected={role.is_none()}>{"Select role"}</option>
                        { for Role::SELECTABLE.iter().map(|r| html! {
                            <option value={r.as_str()} selected={*role == Some(*r)}>
                                { r.label() }
                            </option>
                        })}
                    </select>

                    <label class="form-label">{"Password"}</label>
                    <PasswordInput
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                        placeholder="••••••••"
                        disabled={*loading}
                    />

                    <button class="btn btn-primary btn-block" onclick={on_submit} disabled={*loading}>
                        { if *loading { "Creating..." } else { "Create Account" } }
                    </button>

                    <p class="auth-switch">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    </p>
                </div>

                <div class="auth-footer">{"© 2026 PresenX"}</div>
            </div>
        </div>
    }
}
