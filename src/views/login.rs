use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{use_auth, use_toast};
use crate::models::LoginRequest;
use crate::routes::Route;
use crate::views::AuthLayout;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let email = use_state(String::new);
    let password = use_state(String::new);

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

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let login = auth.login.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_val = (*email).clone();
            let password_val = (*password).clone();

            // Client-side validation happens before any network call.
            if email_val.is_empty() || password_val.is_empty() {
                toast.error("Please fill in all fields");
                return;
            }

            login.emit(LoginRequest {
                email: email_val,
                password: password_val,
            });
        })
    };

    html! {
        <AuthLayout
            title="Welcome Back"
            description="Sign in to your QuickDesk account to manage support tickets"
        >
            <form class="auth-form" onsubmit={on_submit}>
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
                        placeholder="Enter your password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        required=true
                    />
                </div>

                <button type="submit" class="btn-primary" disabled={auth.session.is_loading}>
                    { if auth.session.is_loading { "Signing in..." } else { "Sign In" } }
                </button>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Register}>{"Sign up"}</Link<Route>>
                </p>
            </form>
        </AuthLayout>
    }
}
