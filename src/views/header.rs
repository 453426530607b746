use yew::prelude::*;

use crate::context::{use_auth, use_theme, Theme};

/// Top bar of the authenticated shell: theme toggle plus the user menu.
#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let theme = use_theme();

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let theme_icon = match theme.theme {
        Theme::Dark => "🌙",
        Theme::Light => "☀️",
        Theme::System => "🖥️",
    };

    html! {
        <header class="app-header">
            <div class="header-actions">
                <button class="btn-icon-header" onclick={on_toggle_theme} title="Toggle theme">
                    { theme_icon }
                </button>
                {
                    if let Some(user) = auth.session.user.as_ref() {
                        html! {
                            <div class="user-menu">
                                <img class="user-avatar" src={user.avatar_url()} alt={user.name.clone()} />
                                <div class="user-meta">
                                    <span class="user-name">{ &user.name }</span>
                                    <span class="user-role">{ user.role.as_str() }</span>
                                </div>
                                <button class="btn-logout" onclick={on_logout}>{"Log out"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
