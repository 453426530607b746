use yew::prelude::*;

use crate::views::{Header, Sidebar};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Authenticated shell: sidebar navigation plus header around the page body.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="app-content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
