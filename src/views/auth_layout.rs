use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub children: Children,
}

/// Centered branding card used by the login and register pages.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-brand">
                    <div class="brand-icon-large">{"🎫"}</div>
                    <h1>{"QuickDesk"}</h1>
                    <p>{"Help Desk Management System"}</p>
                </div>
                <div class="auth-card">
                    <h2>{ props.title.clone() }</h2>
                    <p class="auth-description">{ props.description.clone() }</p>
                    { props.children.clone() }
                </div>
                <p class="auth-footer">{"© 2024 QuickDesk. All rights reserved."}</p>
            </div>
        </div>
    }
}
