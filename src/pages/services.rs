use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::modal::{ModalContent, ModalController, ModalSurface, ServiceModal};
use crate::components::notification::{ToastHost, ToastList, Toaster};
use crate::config;
use crate::motion::cards::{CardBoard, ToggleOutcome};
use crate::motion::reveal::{Reveal, RevealOptions};
use crate::motion::scrollwatch::AnchorLinks;
use crate::motion::sequence::{Sequence, SequenceHandle};
use crate::motion::stage::Stage;
use crate::motion::tilt::TiltVector;
use crate::motion::viewport;

struct ServiceDef {
    title: &'static str,
    blurb: &'static str,
    category: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[ServiceDef] = &[
    ServiceDef {
        title: "Brand identity",
        blurb: "Naming, logotype, color and type systems, and the guidelines that keep them coherent.",
        category: "design",
        features: &["Naming workshops", "Visual identity system", "Brand guidelines", "Asset library"],
    },
    ServiceDef {
        title: "Editorial design",
        blurb: "Reports, lookbooks, and publications designed to be read, not skimmed.",
        category: "design",
        features: &["Art direction", "Layout systems", "Print production", "Digital editions"],
    },
    ServiceDef {
        title: "Marketing websites",
        blurb: "Fast, maintainable sites that keep their shine long after the launch tweet.",
        category: "digital",
        features: &["Design and build", "CMS setup", "Performance budget", "Analytics wiring"],
    },
    ServiceDef {
        title: "Product storefronts",
        blurb: "Commerce experiences tuned for conversion without the dark patterns.",
        category: "digital",
        features: &["Store design", "Checkout flows", "Merch drops", "A/B testing"],
    },
    ServiceDef {
        title: "Positioning",
        blurb: "Sharpen who you are for, what you replace, and why now.",
        category: "strategy",
        features: &["Market mapping", "Messaging hierarchy", "Proof points", "Pitch narrative"],
    },
    ServiceDef {
        title: "Launch campaigns",
        blurb: "Coordinated launches across channels with one story and one measurable goal.",
        category: "strategy",
        features: &["Campaign concept", "Channel plan", "Creative production", "Post-launch review"],
    },
];

const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("design", "Design"),
    ("digital", "Digital"),
    ("strategy", "Strategy"),
];

fn matches(token: &str, def: &ServiceDef) -> bool {
    token == "all" || def.category == token
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    title: &'static str,
    blurb: &'static str,
    expanded: bool,
    on_toggle: Callback<usize>,
    on_quote: Callback<()>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let tilt = use_state(|| TiltVector::NEUTRAL);
    let node = use_node_ref();

    let onmousemove = {
        let tilt = tilt.clone();
        let node = node.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(window) = web_sys::window() else { return };
            // Small screens render flat.
            if !viewport::current(&window).tilt_enabled() {
                return;
            }
            let Some(card) = node.cast::<HtmlElement>() else { return };
            let rect = card.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            tilt.set(TiltVector::from_pointer(x, y, rect.width(), rect.height()));
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_| tilt.set(TiltVector::NEUTRAL))
    };
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |event: MouseEvent| {
            // Clicks on the embedded action button don't toggle the card.
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if target.closest(".service-btn").ok().flatten().is_some() {
                    return;
                }
            }
            on_toggle.emit(index);
        })
    };
    let on_quote_click = {
        let on_quote = props.on_quote.clone();
        Callback::from(move |_: MouseEvent| on_quote.emit(()))
    };

    html! {
        <article
            ref={node}
            class={classes!("service-card", props.expanded.then_some("expanded"))}
            style={format!("transform: {};", tilt.transform())}
            tabindex="0"
            aria-label={format!("Service: {}", props.title)}
            aria-expanded={props.expanded.to_string()}
            {onclick}
            {onmousemove}
            {onmouseleave}
        >
            <h3 class="service-title">{props.title}</h3>
            <p class="service-description">{props.blurb}</p>
            <button type="button" class="service-btn" onclick={on_quote_click}>
                {"Request a quote"}
            </button>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let board = use_state(CardBoard::new);
    let active = use_state(|| "all".to_string());
    let settled = use_state(|| "all".to_string());
    let settle_seq = use_mut_ref(|| None::<SequenceHandle>);

    let surface = use_reducer(ModalSurface::default);
    let controller = ModalController::new(surface.dispatcher());
    let toasts = use_reducer(ToastList::default);
    let toaster = Toaster::new(toasts.dispatcher());

    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().expect("window should exist");
            let document = window.document().expect("document should exist");
            let stage = Stage::resolve(&document);
            let reveal = Reveal::class_marker(RevealOptions::default(), &stage.reveal_targets);
            let anchors = AnchorLinks::wire(&window, &stage.anchor_links);
            move || {
                drop(anchors);
                drop(reveal);
            }
        },
        (),
    );

    let on_toggle = {
        let board = board.clone();
        let controller = controller.clone();
        Callback::from(move |index: usize| {
            let mut next = *board;
            match next.toggle(index) {
                ToggleOutcome::Expanded { collapsed } => {
                    if let Some(previous) = collapsed {
                        gloo_console::log!("collapsing card", previous);
                    }
                    let def = &SERVICES[index];
                    controller.populate(ModalContent {
                        title: def.title.to_string(),
                        body: def.blurb.to_string(),
                        features: def.features.iter().map(|f| f.to_string()).collect(),
                    });
                    controller.show();
                }
                ToggleOutcome::Collapsed => {}
            }
            board.set(next);
        })
    };

    let on_quote = {
        let toaster = toaster.clone();
        Callback::from(move |_| {
            toaster.info("Quote request received. We'll reply within two business days.");
        })
    };

    let filter_buttons = FILTERS.iter().map(|(token, label)| {
        let is_active = *active == *token;
        let onclick = {
            let active = active.clone();
            let settled = settled.clone();
            let settle_seq = settle_seq.clone();
            let token = token.to_string();
            Callback::from(move |_: MouseEvent| {
                if *active == token {
                    return;
                }
                active.set(token.clone());
                // Items leaving the grid get a settle window before they
                // unmount; a quick second click restarts it.
                let settled = settled.clone();
                let token = token.clone();
                let handle = Sequence::new()
                    .at(config::FILTER_SETTLE_MS, move || settled.set(token))
                    .play();
                *settle_seq.borrow_mut() = Some(handle);
            })
        };
        html! {
            <button
                type="button"
                class={classes!("filter-btn", is_active.then_some("active"))}
                data-filter={*token}
                aria-pressed={is_active.to_string()}
                {onclick}
            >
                {*label}
            </button>
        }
    });

    let mut enter_index = 0usize;
    let cards = SERVICES.iter().enumerate().filter_map(|(index, def)| {
        let entering = matches(&active, def);
        let lingering = matches(&settled, def);
        if !entering && !lingering {
            return None;
        }
        let delay = if entering {
            let d = enter_index as u32 * config::FILTER_STEP_MS;
            enter_index += 1;
            d
        } else {
            0
        };
        Some(html! {
            <div
                class={classes!("service-item", def.category, (!entering).then_some("leaving"))}
                style={format!("animation-delay: {delay}ms;")}
                key={def.title}
            >
                <ServiceCard
                    index={index}
                    title={def.title}
                    blurb={def.blurb}
                    expanded={board.is_expanded(index)}
                    on_toggle={on_toggle.clone()}
                    on_quote={on_quote.clone()}
                />
            </div>
        })
    });

    html! {
        <div class="page page-services">
            <style>
                {r#"
                    .services-hero {
                        padding: 8rem 2rem 3rem;
                        background: linear-gradient(135deg, var(--primary-color), var(--dark-color));
                        color: #fff;
                    }
                    .services-hero h1 { font-size: 2.4rem; margin: 0; }
                    .filter-row {
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                        max-width: 1080px;
                        margin: 2.5rem auto 0;
                        padding: 0 2rem;
                    }
                    .filter-btn {
                        border: 1px solid var(--primary-color);
                        background: none;
                        color: var(--primary-color);
                        border-radius: 999px;
                        padding: 0.45rem 1.2rem;
                        cursor: pointer;
                    }
                    .filter-btn.active {
                        background: var(--primary-color);
                        color: #fff;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                        max-width: 1080px;
                        margin: 2rem auto 6rem;
                        padding: 0 2rem;
                    }
                    .service-item {
                        animation: item-in 0.4s ease-out both;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .service-item.leaving {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    @keyframes item-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .service-card {
                        background: #fff;
                        border-radius: 14px;
                        padding: 1.75rem;
                        box-shadow: 0 10px 30px rgba(0,0,0,0.08);
                        cursor: pointer;
                        height: 100%;
                        transition: box-shadow 0.2s ease;
                    }
                    .service-card:hover { box-shadow: 0 18px 44px rgba(0,0,0,0.14); }
                    .service-card.expanded { outline: 2px solid var(--primary-color); }
                    .service-title { margin-top: 0; }
                    .service-description { color: var(--muted-color); }
                    .service-btn {
                        margin-top: 1rem;
                        border: none;
                        background: var(--primary-color);
                        color: #fff;
                        border-radius: 8px;
                        padding: 0.55rem 1.1rem;
                        cursor: pointer;
                    }
                "#}
            </style>

            <section class="services-hero">
                <h1>{"Services"}</h1>
            </section>

            <div class="filter-row" role="group" aria-label="Filter services">
                { for filter_buttons }
            </div>

            <div class="services-grid">
                { for cards }
            </div>

            <ServiceModal
                surface={(*surface).clone()}
                controller={controller}
                on_quote={on_quote.clone()}
            />
            <ToastHost toasts={(*toasts).toasts.clone()} toaster={toaster} />
        </div>
    }
}
