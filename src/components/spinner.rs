use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub full_screen: bool,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    if props.full_screen {
        html! {
            <div class="spinner-screen">
                <div class="spinner"></div>
            </div>
        }
    } else {
        html! { <div class="spinner"></div> }
    }
}
