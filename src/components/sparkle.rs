//! Cursor sparkle layer. Pointer moves over the featured surfaces spawn a
//! short-lived sparkle; the layer never holds more than the budget at once.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::limiter::Throttle;

#[derive(Debug, Clone, PartialEq)]
struct Sparkle {
    id: u32,
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Default)]
struct SparkleField {
    sparkles: Vec<Sparkle>,
}

enum SparkleAction {
    Spawn(Sparkle),
    Expire(u32),
}

impl Reducible for SparkleField {
    type Action = SparkleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut sparkles = self.sparkles.clone();
        match action {
            SparkleAction::Spawn(sparkle) => {
                if sparkles.len() >= config::SPARKLE_BUDGET {
                    return self;
                }
                sparkles.push(sparkle);
            }
            SparkleAction::Expire(id) => sparkles.retain(|sparkle| sparkle.id != id),
        }
        Rc::new(Self { sparkles })
    }
}

#[function_component(SparkleLayer)]
pub fn sparkle_layer() -> Html {
    let field = use_reducer(SparkleField::default);

    {
        let dispatcher = field.dispatcher();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .expect("document should exist");
                let next_id = Rc::new(Cell::new(0u32));

                let throttle =
                    Throttle::new(config::POINTER_THROTTLE_MS, move |event: MouseEvent| {
                        let Some(target) =
                            event.target().and_then(|t| t.dyn_into::<Element>().ok())
                        else {
                            return;
                        };
                        if target.closest(config::SPARKLE_SURFACES).ok().flatten().is_none() {
                            return;
                        }
                        let id = next_id.get();
                        next_id.set(id.wrapping_add(1));
                        dispatcher.dispatch(SparkleAction::Spawn(Sparkle {
                            id,
                            x: event.client_x(),
                            y: event.client_y(),
                        }));
                        let dispatcher = dispatcher.clone();
                        Timeout::new(config::SPARKLE_LIFETIME_MS, move || {
                            dispatcher.dispatch(SparkleAction::Expire(id));
                        })
                        .forget();
                    });

                let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
                    throttle.call(event);
                }) as Box<dyn FnMut(MouseEvent)>);
                let _ = document.add_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    html! {
        <div class="sparkle-layer" aria-hidden="true">
            <style>
                {r#"
                    .sparkle-effect {
                        position: fixed;
                        width: 4px;
                        height: 4px;
                        background: #f39c12;
                        border-radius: 50%;
                        pointer-events: none;
                        z-index: 9999;
                        opacity: 0.7;
                        animation: sparkle 1s ease-out forwards;
                    }
                    @keyframes sparkle {
                        0% { transform: scale(0) rotate(0deg); opacity: 0.7; }
                        50% { transform: scale(1) rotate(180deg); opacity: 1; }
                        100% { transform: scale(0) rotate(360deg); opacity: 0; }
                    }
                "#}
            </style>
            { for field.sparkles.iter().map(|sparkle| html! {
                <span
                    class="sparkle-effect"
                    key={sparkle.id}
                    style={format!("left: {}px; top: {}px;", sparkle.x, sparkle.y)}
                />
            }) }
        </div>
    }
}
