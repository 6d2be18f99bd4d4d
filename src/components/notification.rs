use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast list state. Lives in a reducer so pushes and dismissals from timer
/// closures always see the current list.
#[derive(Clone, PartialEq, Default)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Cloneable handle pages hand to whatever needs to raise a toast.
#[derive(Clone)]
pub struct Toaster {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher
    }
}

impl Toaster {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>) -> Self {
        Self {
            dispatcher,
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));

        let toaster = self.clone();
        Timeout::new(config::TOAST_DISMISS_MS, move || toaster.dismiss(id)).forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub toaster: Toaster,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-stack" aria-live="polite">
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        max-width: 400px;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 12px;
                        padding: 14px 16px;
                        border-radius: 10px;
                        color: #fff;
                        box-shadow: 0 10px 30px rgba(0,0,0,0.2);
                        animation: toast-in 0.3s ease-out;
                    }
                    .toast-success { background: rgba(39, 120, 80, 0.95); }
                    .toast-info { background: rgba(44, 62, 80, 0.95); }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.1rem;
                        cursor: pointer;
                        line-height: 1;
                    }
                    @keyframes toast-in {
                        from { transform: translateX(40px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| {
                let toaster = props.toaster.clone();
                let id = toast.id;
                let onclick = Callback::from(move |_| toaster.dismiss(id));
                html! {
                    <div class={classes!("toast", "notification-toast", toast.kind.css_class())} key={toast.id}>
                        <span>{&toast.message}</span>
                        <button type="button" class="toast-close" aria-label="Dismiss" {onclick}>
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
