use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{Spinner, TicketCard};
use crate::context::use_toast;
use crate::models::{Ticket, TicketFilter, TicketStatus};
use crate::services::ApiClient;

/// Tickets created by the current user. Fetched once; search and status
/// filters are applied locally.
#[function_component(MyTicketsView)]
pub fn my_tickets_view() -> Html {
    let toast = use_toast();
    let tickets = use_state(Vec::<Ticket>::new);
    let loading = use_state(|| true);
    let search = use_state(String::new);
    let status_filter = use_state(|| None::<TicketStatus>);

    {
        let tickets = tickets.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.tickets(&TicketFilter::default()).await {
                    Ok(list) => {
                        log::info!("🎫 Loaded {} tickets", list.len());
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

    let on_search_change = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            status_filter.set(match value.as_str() {
                "open" => Some(TicketStatus::Open),
                "in-progress" => Some(TicketStatus::InProgress),
                "resolved" => Some(TicketStatus::Resolved),
                "closed" => Some(TicketStatus::Closed),
                _ => None,
            });
        })
    };

    let needle = search.to_lowercase();
    let visible: Vec<Ticket> = tickets
        .iter()
        .filter(|t| status_filter.map_or(true, |s| t.status == s))
        .filter(|t| {
            needle.is_empty()
                || t.subject.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    html! {
        <div class="page tickets">
            <div class="page-header">
                <h1>{"My Tickets"}</h1>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search tickets..."
                    value={(*search).clone()}
                    oninput={on_search_change}
                />
                <select class="filter-select" onchange={on_status_change}>
                    <option value="all" selected=true>{"All statuses"}</option>
                    <option value="open">{"Open"}</option>
                    <option value="in-progress">{"In Progress"}</option>
                    <option value="resolved">{"Resolved"}</option>
                    <option value="closed">{"Closed"}</option>
                </select>
            </div>

            {
                if *loading {
                    html! { <Spinner /> }
                } else if visible.is_empty() {
                    html! {
                        <div class="empty-state">
                            <div class="empty-icon">{"🎫"}</div>
                            <p>{"No tickets match your filters"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="ticket-list">
                            {
                                for visible.iter().map(|ticket| html! {
                                    <TicketCard key={ticket.id.clone()} ticket={ticket.clone()} />
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
