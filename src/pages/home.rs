use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::motion::counter::{self, Counter};
use crate::motion::reveal::{Reveal, RevealOptions};
use crate::motion::scrollwatch::AnchorLinks;
use crate::motion::sequence::{staggered_offsets, Sequence};
use crate::motion::stage::Stage;
use crate::Route;

/// A stat figure that counts up from zero the first time it scrolls into
/// view. The element's initial text doubles as the animation source.
#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub source: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let display = use_state(|| props.source.to_string());
    let node = use_node_ref();

    {
        let display = display.clone();
        let source = props.source.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let armed = Rc::clone(&slot);
                let reveal = node.cast::<Element>().and_then(|element| {
                    Reveal::once(&element, move || {
                        let (target, format) = counter::parse_target(&source);
                        let counter = Rc::new(RefCell::new(Counter::new(target)));
                        let finished = Rc::clone(&armed);
                        let interval = Interval::new(Counter::step_interval_ms(), move || {
                            let value = counter.borrow_mut().tick();
                            display.set(format.render(value));
                            if counter.borrow().done() {
                                // Target reached: drop the timer.
                                finished.borrow_mut().take();
                            }
                        });
                        *armed.borrow_mut() = Some(interval);
                    })
                });
                move || {
                    slot.borrow_mut().take();
                    drop(reveal);
                }
            },
            (),
        );
    }

    html! {
        <div class="stat-card">
            <span class="stat-number" ref={node}>{(*display).clone()}</span>
            <span class="stat-label">{props.label.to_string()}</span>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let hero_title = use_node_ref();
    let hero_lead = use_node_ref();
    let hero_actions = use_node_ref();

    {
        let hero_refs = [hero_title.clone(), hero_lead.clone(), hero_actions.clone()];
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window should exist");
                let document = window.document().expect("document should exist");

                let stage = Stage::resolve(&document);
                let reveal = Reveal::class_marker(RevealOptions::default(), &stage.reveal_targets);
                let lazy = Reveal::lazy_images(&stage.lazy_images);
                let anchors = AnchorLinks::wire(&window, &stage.anchor_links);

                // Hero elements slide in one after another.
                let offsets = staggered_offsets(
                    hero_refs.len(),
                    config::HERO_BASE_DELAY_MS,
                    config::HERO_STEP_DELAY_MS,
                );
                let mut entrance = Sequence::new();
                for (node, offset) in hero_refs.iter().zip(offsets) {
                    let node = node.clone();
                    entrance = entrance.at(offset, move || {
                        if let Some(element) = node.cast::<HtmlElement>() {
                            let _ = element.class_list().add_1("hero-in");
                        }
                    });
                }
                let entrance = entrance.play();

                move || {
                    drop(entrance);
                    drop(anchors);
                    drop(lazy);
                    drop(reveal);
                }
            },
            (),
        );
    }

    html! {
        <div class="page page-home">
            <style>
                {r#"
                    .hero {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        background: linear-gradient(135deg, var(--primary-color), var(--dark-color));
                        color: #fff;
                    }
                    .hero .hero-line {
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    .hero .hero-line.hero-in {
                        opacity: 1;
                        transform: translateY(0);
                        transition: all 0.8s ease-out;
                    }
                    .hero h1 { font-size: 2.8rem; max-width: 720px; margin: 0 0 1rem; }
                    .hero .lead { font-size: 1.25rem; max-width: 560px; opacity: 0.9; }
                    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; }
                    .stats-section { padding: 5rem 2rem; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        max-width: 960px;
                        margin: 0 auto;
                    }
                    .stat-card { text-align: center; }
                    .stat-number {
                        display: block;
                        font-size: 2.6rem;
                        font-weight: 700;
                        color: var(--primary-color);
                    }
                    .stat-label { color: var(--muted-color); }
                    .preview-section { padding: 4rem 2rem 6rem; }
                    .preview-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1080px;
                        margin: 2rem auto 0;
                    }
                "#}
            </style>

            <section class="hero">
                <h1 class="hero-line" ref={hero_title}>
                    {"Design and engineering for brands that move."}
                </h1>
                <p class="lead hero-line" ref={hero_lead}>
                    {"Wavecrest Studio builds identities, websites, and campaigns for teams that want to be seen."}
                </p>
                <div class="hero-actions hero-line" ref={hero_actions}>
                    <Link<Route> to={Route::Services} classes="btn-custom">
                        {"Explore services"}
                    </Link<Route>>
                    <a class="btn-custom btn-secondary" href="#studio-stats">{"Why us"}</a>
                </div>
            </section>

            <section id="studio-stats" class="stats-section" aria-label="Studio statistics">
                <div class="stats-grid">
                    <StatCounter source="150+" label="Projects delivered" />
                    <StatCounter source="98%" label="Client satisfaction" />
                    <StatCounter source="2015" label="Founded" />
                    <StatCounter source="12+" label="Industry awards" />
                </div>
            </section>

            <section class="preview-section">
                <h2 class="animate-on-scroll">{"What we do"}</h2>
                <div class="preview-grid">
                    <Link<Route> to={Route::Services} classes="story-card animate-on-scroll stagger">
                        <h3>{"Brand identity"}</h3>
                        <p>{"Naming, visual systems, and guidelines that scale."}</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="story-card animate-on-scroll stagger">
                        <h3>{"Web experiences"}</h3>
                        <p>{"Fast marketing sites and product storefronts."}</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="story-card animate-on-scroll stagger">
                        <h3>{"Growth campaigns"}</h3>
                        <p>{"Launches and always-on campaigns with clear goals."}</p>
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
