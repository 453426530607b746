use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{use_auth, use_toast};
use crate::models::{RegisterRequest, Role};
use crate::routes::Route;
use crate::views::AuthLayout;

const MIN_PASSWORD_LEN: usize = 6;

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let role = use_state(|| Role::User);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_confirm_change = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirm.set(input.value());
        })
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(Role::from_str(&select.value()));
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let role = role.clone();
        let register = auth.register.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.is_empty() || email.is_empty() || password.is_empty() {
                toast.error("Please fill in all fields");
                return;
            }
            if password.len() < MIN_PASSWORD_LEN {
                toast.error(format!(
                    "Password must be at least {} characters",
                    MIN_PASSWORD_LEN
                ));
                return;
            }
            if *password != *confirm {
                toast.error("Passwords do not match");
                return;
            }

            register.emit(RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                name: (*name).clone(),
                role: *role,
            });
        })
    };

    html! {
        <AuthLayout
            title="Create Account"
            description="Sign up for QuickDesk to start tracking support tickets"
        >
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Jane Doe"
                        value={(*name).clone()}
                        oninput={on_name_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="you@company.com"
                        value={(*email).clone()}
                        oninput={on_email_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        placeholder="At least 6 characters"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="confirm">{"Confirm Password"}</label>
                    <input
                        type="password"
                        id="confirm"
                        placeholder="Repeat your password"
                        value={(*confirm).clone()}
                        oninput={on_confirm_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="role">{"Account Type"}</label>
                    <select id="role" onchange={on_role_change}>
                        <option value="user" selected={*role == Role::User}>{"End User"}</option>
                        <option value="agent" selected={*role == Role::Agent}>{"Support Agent"}</option>
                    </select>
                </div>

                <button type="submit" class="btn-primary" disabled={auth.session.is_loading}>
                    { if auth.session.is_loading { "Creating account..." } else { "Sign Up" } }
                </button>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                </p>
            </form>
        </AuthLayout>
    }
}
