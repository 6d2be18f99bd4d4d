use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod cards;
    pub mod counter;
    pub mod limiter;
    pub mod reveal;
    pub mod scrollwatch;
    pub mod sequence;
    pub mod stage;
    pub mod tilt;
    pub mod viewport;
}
mod forms {
    pub mod contact_form;
    pub mod validate;
}
mod components {
    pub mod modal;
    pub mod notification;
    pub mod sparkle;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use components::sparkle::SparkleLayer;
use motion::limiter::{Debounce, Throttle};
use motion::scrollwatch::{NavFrame, ScrollTracker};
use motion::viewport::{self, Breakpoint};
use pages::{about::About, contact::Contact, home::Home, services::Services};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let frame = use_state(NavFrame::default);

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                let window = window().expect("window should exist");

                // Direction detection needs the previous sample; the tracker
                // lives inside the throttled handler, not in a global.
                let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
                let throttle = Throttle::new(config::SCROLL_THROTTLE_MS, move |offset: f64| {
                    frame.set(tracker.borrow_mut().sample(offset));
                });

                let listener_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = listener_window.scroll_y().unwrap_or(0.0);
                    throttle.call(offset);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("scroll listener should attach");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!(
            "navbar",
            frame.solid.then_some("scrolled"),
            frame.hidden.then_some("nav-hidden"),
        )}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Wavecrest Studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    // Body-level reactors: breakpoint classes, keyboard-focus marker, and
    // the first-paint fade.
    use_effect_with_deps(
        move |_| {
            let window = window().expect("window should exist");
            let document = window.document().expect("document should exist");

            viewport::apply(&document, viewport::current(&window));
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("app-ready");
            }

            let resize_window = window.clone();
            let resize_document = document.clone();
            let debounce = Debounce::new(config::RESIZE_DEBOUNCE_MS, move |width: f64| {
                viewport::apply(&resize_document, Breakpoint::classify(width));
            });
            let inner_window = window.clone();
            let resize_callback = Closure::wrap(Box::new(move || {
                let width = inner_window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                debounce.call(width);
            }) as Box<dyn FnMut()>);
            let _ = resize_window.add_event_listener_with_callback(
                "resize",
                resize_callback.as_ref().unchecked_ref(),
            );

            let keydown_document = document.clone();
            let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Tab" {
                    if let Some(body) = keydown_document.body() {
                        let _ = body.class_list().add_1("keyboard-navigation");
                    }
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ = document.add_event_listener_with_callback(
                "keydown",
                keydown_callback.as_ref().unchecked_ref(),
            );

            let mousedown_document = document.clone();
            let mousedown_callback = Closure::wrap(Box::new(move || {
                if let Some(body) = mousedown_document.body() {
                    let _ = body.class_list().remove_1("keyboard-navigation");
                }
            }) as Box<dyn FnMut()>);
            let _ = document.add_event_listener_with_callback(
                "mousedown",
                mousedown_callback.as_ref().unchecked_ref(),
            );

            move || {
                let _ = resize_window.remove_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    keydown_callback.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_callback.as_ref().unchecked_ref(),
                );
            }
        },
        (),
    );

    html! {
        <BrowserRouter>
            <a class="skip-link" href="#main-content">{"Skip to main content"}</a>
            <Nav />
            <main id="main-content">
                <Switch<Route> render={switch} />
            </main>
            <footer class="site-footer">
                <p>{"© Wavecrest Studio. Made by the sea."}</p>
            </footer>
            <SparkleLayer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
