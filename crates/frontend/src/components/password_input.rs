//! Password field with a show/hide toggle.

use yew::prelude::*;

/// Properties for PasswordInput.
#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub onkeypress: Option<Callback<KeyboardEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("Enter your password"))]
    pub placeholder: AttrValue,
}

/// Password input whose visibility is local to the field.
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let visible = use_state(|| false);

    let on_toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <div class="password-field">
            <input
                type={if *visible { "text" } else { "password" }}
                class="form-input"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                onkeypress={props.onkeypress.clone()}
                disabled={props.disabled}
            />
            <button
                type="button"
                class="password-toggle"
                onclick={on_toggle}
                disabled={props.disabled}
                aria-label={if *visible { "Hide password" } else { "Show password" }}
            >
                { if *visible { "Hide" } else { "Show" } }
            </button>
        </div>
    }
}
