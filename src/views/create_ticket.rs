use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_toast;
use crate::models::{CreateTicketRequest, TicketCategory, TicketPriority};
use crate::routes::Route;
use crate::services::ApiClient;

const MIN_SUBJECT_LEN: usize = 5;
const MIN_DESCRIPTION_LEN: usize = 20;

#[function_component(CreateTicketView)]
pub fn create_ticket_view() -> Html {
    let toast = use_toast();
    let navigator = use_navigator();

    let subject = use_state(String::new);
    let description = use_state(String::new);
    let category_id = use_state(String::new);
    let priority = use_state(|| TicketPriority::Medium);
    let categories = use_state(Vec::<TicketCategory>::new);
    let submitting = use_state(|| false);

    {
        let categories = categories.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.categories().await {
                    Ok(list) => {
                        log::info!("🏷️ Loaded {} categories", list.len());
                        categories.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load categories: {}", e);
                        toast.error(e.to_string());
                    }
                }
            });
            || ()
        });
    }

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };

    let on_priority_change = {
        let priority = priority.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            priority.set(match select.value().as_str() {
                "low" => TicketPriority::Low,
                "high" => TicketPriority::High,
                "urgent" => TicketPriority::Urgent,
                _ => TicketPriority::Medium,
            });
        })
    };

    let on_submit = {
        let subject = subject.clone();
        let description = description.clone();
        let category_id = category_id.clone();
        let priority = priority.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validation runs entirely client-side before any network call.
            if subject.trim().len() < MIN_SUBJECT_LEN {
                toast.error(format!(
                    "Subject must be at least {} characters",
                    MIN_SUBJECT_LEN
                ));
                return;
            }
            if description.trim().len() < MIN_DESCRIPTION_LEN {
                toast.error(format!(
                    "Description must be at least {} characters",
                    MIN_DESCRIPTION_LEN
                ));
                return;
            }
            if category_id.is_empty() {
                toast.error("Category is required");
                return;
            }

            let request = CreateTicketRequest {
                subject: subject.trim().to_string(),
                description: description.trim().to_string(),
                category_id: (*category_id).clone(),
                priority: *priority,
                tags: Vec::new(),
            };

            let submitting = submitting.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.create_ticket(&request).await {
                    Ok(ticket) => {
                        log::info!("✅ Ticket created: {}", ticket.id);
                        toast.success("Ticket created");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::MyTickets);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Create ticket failed: {}", e);
                        toast.error(e.to_string());
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page create-ticket">
            <div class="page-header">
                <h1>{"Create Ticket"}</h1>
                <p class="page-subtitle">{"Describe your issue and we'll route it to the right team."}</p>
            </div>

            <form class="ticket-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="subject">{"Subject"}</label>
                    <input
                        type="text"
                        id="subject"
                        placeholder="Brief summary of the issue"
                        value={(*subject).clone()}
                        oninput={on_subject_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        rows="6"
                        placeholder="What happened? What did you expect?"
                        value={(*description).clone()}
                        oninput={on_description_change}
                        required=true
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <select id="category" onchange={on_category_change}>
                            <option value="" selected={category_id.is_empty()}>{"Select a category"}</option>
                            {
                                for categories.iter().map(|c| html! {
                                    <option key={c.id.clone()} value={c.id.clone()}>{ &c.name }</option>
                                })
                            }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="priority">{"Priority"}</label>
                        <select id="priority" onchange={on_priority_change}>
                            <option value="low">{"Low"}</option>
                            <option value="medium" selected=true>{"Medium"}</option>
                            <option value="high">{"High"}</option>
                            <option value="urgent">{"Urgent"}</option>
                        </select>
                    </div>
                </div>

                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Creating..." } else { "Create Ticket" } }
                </button>
            </form>
        </div>
    }
}
