// ============================================================================
// TOAST CONTEXT - transient notifications
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub push: Callback<(ToastKind, String)>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast must be used within a ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0u32);

    let push = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = *next_id;
            next_id.set(id.wrapping_add(1));

            let mut list = (*toasts).clone();
            list.push(Toast { id, kind, message });
            toasts.set(list);

            // Auto-dismiss after a few seconds.
            let toasts = toasts.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                let list: Vec<Toast> = (*toasts)
                    .clone()
                    .into_iter()
                    .filter(|t| t.id != id)
                    .collect();
                toasts.set(list);
            })
            .forget();
        })
    };

    let handle = ToastHandle { push };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-stack">
                {
                    for toasts.iter().map(|toast| html! {
                        <div key={toast.id} class={classes!("toast", toast.kind.css_class())}>
                            { &toast.message }
                        </div>
                    })
                }
            </div>
        </ContextProvider<ToastHandle>>
    }
}
