use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::navigation::items_for_role;
use crate::routes::Route;

/// Role-gated navigation menu. The entry list is recomputed from the
/// session on every render.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let auth = use_auth();
    let current = use_route::<Route>();

    let items = match auth.session.user.as_ref() {
        Some(user) => items_for_role(user.role),
        None => Vec::new(),
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-icon">{"🎫"}</span>
                <div>
                    <h2>{"QuickDesk"}</h2>
                    <p class="brand-subtitle">{"Help Desk System"}</p>
                </div>
            </div>
            <nav class="sidebar-nav">
                <span class="sidebar-label">{"Main Navigation"}</span>
                <ul>
                    {
                        for items.iter().map(|item| {
                            let active = current == Some(item.route);
                            html! {
                                <li key={item.label}>
                                    <Link<Route>
                                        to={item.route}
                                        classes={classes!("nav-link", active.then_some("active"))}
                                    >
                                        <span class="nav-icon">{ item.icon }</span>
                                        <span class="nav-label">{ item.label }</span>
                                        {
                                            if let Some(badge) = item.badge {
                                                html! { <span class="nav-badge">{ badge }</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </Link<Route>>
                                </li>
                            }
                        })
                    }
                </ul>
            </nav>
        </aside>
    }
}
