//! Login page component.

use auth_client::{AuthError, LoginForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{ErrorBanner, PasswordInput, Spinner, bind_input, on_enter};
use crate::services::{browser_auth_client, use_session};

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |_: ()| {
            if *loading {
                return;
            }
            error.set(None);

            let form = LoginForm::new(&email, &password);
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let session = session.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match browser_auth_client().login(&form).await {
                    Ok(success) => {
                        session.refresh();
                        log::info!("signed in with role {}", success.role.as_str());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from(success.destination));
                        }
                    }
                    Err(e) => {
                        // The token is already stored when only the role is unknown
                        if matches!(e, AuthError::UnrecognizedRole(_)) {
                            session.refresh();
                        }
                        log::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_keypress = on_enter(on_submit.clone());
    let on_click = on_submit.reform(|_: MouseEvent| ());

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <span class="brand-mark">{"P"}</span>
                    <h1>{"PresenX"}</h1>
                    <p>{"Attendance Made Easy"}</p>
                </div>

                <div class="auth-body">
                    <ErrorBanner message={(*error).clone()} />

                    <label class="form-label">{"Email Address"}</label>
                    <input
                        type="email"
                        class="form-input"
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                        onkeypress={on_keypress.clone()}
                        disabled={*loading}
                    />

                    <label class="form-label">{"Password"}</label>
                    <PasswordInput
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                        onkeypress={on_keypress}
                        disabled={*loading}
                    />

                    <button class="btn btn-primary btn-block" onclick={on_click} disabled={*loading}>
                        if *loading {
                            <Spinner inline={true} />
                            {"Logging in..."}
                        } else {
                            {"Login"}
                        }
                    </button>

                    <div class="divider"><span>{"New to PresenX?"}</span></div>

                    <p class="auth-switch">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::Register}>{"Register here"}</Link<Route>>
                    </p>
                </div>

                <div class="auth-footer">{"© 2026 PresenX. All rights reserved."}</div>
            </div>
        </div>
    }
}
