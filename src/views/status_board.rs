use yew::prelude::*;

use crate::components::{Spinner, TicketCard};
use crate::context::use_toast;
use crate::models::{Ticket, TicketFilter, TicketStatus};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StatusBoardProps {
    pub status: TicketStatus,
}

/// Agent work queue for a single status. The filter is applied server-side.
#[function_component(StatusBoardView)]
pub fn status_board_view(props: &StatusBoardProps) -> Html {
    let toast = use_toast();
    let tickets = use_state(Vec::<Ticket>::new);
    let loading = use_state(|| true);
    let refresh = use_state(|| 0u32);

    {
        let tickets = tickets.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let status = props.status;
        use_effect_with((status, *refresh), move |(status, _)| {
            let status = *status;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.tickets(&TicketFilter::with_status(status)).await {
                    Ok(list) => {
                        log::info!("📋 Loaded {} {} tickets", list.len(), status.as_str());
                        tickets.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load tickets: {}", e);
                        toast.error(e.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Quick internal note on a ticket, prompt-based.
    let on_comment = {
        let toast = toast.clone();
        let refresh = refresh.clone();
        Callback::from(move |ticket_id: String| {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let content = window
                .prompt_with_message("Add an internal note:")
                .ok()
                .flatten()
                .unwrap_or_default();
            if content.trim().is_empty() {
                return;
            }

            let toast = toast.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.add_comment(&ticket_id, content.trim(), true).await {
                    Ok(_) => {
                        toast.success("Note added");
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => {
                        log::error!("❌ Comment failed: {}", e);
                        toast.error(e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="page tickets">
            <div class="page-header">
                <h1>{ format!("{} Tickets", props.status.label()) }</h1>
            </div>

            {
                if *loading {
                    html! { <Spinner /> }
                } else if tickets.is_empty() {
                    html! {
                        <div class="empty-state">
                            <div class="empty-icon">{ props.status.icon() }</div>
                            <p>{ format!("No {} tickets", props.status.label().to_lowercase()) }</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="ticket-list">
                            {
                                for tickets.iter().map(|ticket| {
                                    let comment = {
                                        let on_comment = on_comment.clone();
                                        let id = ticket.id.clone();
                                        Callback::from(move |_: MouseEvent| on_comment.emit(id.clone()))
                                    };
                                    html! {
                                        <div key={ticket.id.clone()} class="ticket-row">
                                            <TicketCard ticket={ticket.clone()} />
                                            <button class="btn-secondary" onclick={comment}>
                                                {"💬 Add note"}
                                            </button>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
