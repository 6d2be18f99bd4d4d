//! The service detail modal. The card state machine only asks this surface
//! to populate itself and show; open/close mechanics live here.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
    pub features: Vec<String>,
}

#[derive(Clone, PartialEq, Default)]
pub struct ModalSurface {
    pub content: ModalContent,
    pub open: bool,
}

pub enum ModalAction {
    Populate(ModalContent),
    Show,
    Hide,
}

impl Reducible for ModalSurface {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Populate(content) => Rc::new(Self { content, open: self.open }),
            ModalAction::Show => Rc::new(Self { content: self.content.clone(), open: true }),
            ModalAction::Hide => Rc::new(Self { content: self.content.clone(), open: false }),
        }
    }
}

/// Handle for collaborators: populate the surface, then ask it to show.
#[derive(Clone, PartialEq)]
pub struct ModalController {
    dispatcher: UseReducerDispatcher<ModalSurface>,
}

impl ModalController {
    pub fn new(dispatcher: UseReducerDispatcher<ModalSurface>) -> Self {
        Self { dispatcher }
    }

    pub fn populate(&self, content: ModalContent) {
        self.dispatcher.dispatch(ModalAction::Populate(content));
    }

    pub fn show(&self) {
        self.dispatcher.dispatch(ModalAction::Show);
    }

    pub fn hide(&self) {
        self.dispatcher.dispatch(ModalAction::Hide);
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub surface: ModalSurface,
    pub controller: ModalController,
    pub on_quote: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    // Escape closes while the modal is open.
    {
        let controller = props.controller.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open.then(|| {
                    let document = web_sys::window()
                        .and_then(|w| w.document())
                        .expect("document should exist");
                    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" {
                            controller.hide();
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                    (document, callback)
                });
                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.surface.open,
        );
    }

    if !props.surface.open {
        return html! {};
    }

    let on_backdrop = {
        let controller = props.controller.clone();
        Callback::from(move |_| controller.hide())
    };
    let on_dialog = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close = {
        let controller = props.controller.clone();
        Callback::from(move |_| controller.hide())
    };
    let on_quote = {
        let controller = props.controller.clone();
        let on_quote = props.on_quote.clone();
        Callback::from(move |_| {
            controller.hide();
            on_quote.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop} role="dialog" aria-modal="true">
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.55);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 10500;
                        padding: 1.5rem;
                    }
                    .modal-dialog {
                        background: #fff;
                        color: #2c3e50;
                        border-radius: 14px;
                        max-width: 640px;
                        width: 100%;
                        box-shadow: 0 24px 60px rgba(0,0,0,0.35);
                        animation: modal-in 0.25s ease-out;
                    }
                    .modal-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 1.5rem;
                        border-bottom: 1px solid rgba(44, 62, 80, 0.12);
                    }
                    .modal-title { margin: 0; font-size: 1.3rem; }
                    .modal-body { padding: 1.25rem 1.5rem; }
                    .modal-features { list-style: none; padding: 0; margin: 1rem 0 0; }
                    .modal-features li { padding: 0.25rem 0; }
                    .modal-features li::before { content: "✓ "; color: #277850; }
                    .modal-footer {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                        padding: 1rem 1.5rem;
                        border-top: 1px solid rgba(44, 62, 80, 0.12);
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 1.4rem;
                        cursor: pointer;
                        line-height: 1;
                    }
                    @keyframes modal-in {
                        from { transform: translateY(24px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="modal-dialog" onclick={on_dialog}>
                <div class="modal-header">
                    <h2 class="modal-title">{&props.surface.content.title}</h2>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close.clone()}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    <p>{&props.surface.content.body}</p>
                    if !props.surface.content.features.is_empty() {
                        <>
                            <h3>{"Key features"}</h3>
                            <ul class="modal-features">
                                { for props.surface.content.features.iter().map(|feature| html! {
                                    <li>{feature}</li>
                                }) }
                            </ul>
                        </>
                    }
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn-custom btn-secondary" onclick={on_close}>
                        {"Close"}
                    </button>
                    <button type="button" class="btn-custom" onclick={on_quote}>
                        {"Request a quote"}
                    </button>
                </div>
            </div>
        </div>
    }
}
