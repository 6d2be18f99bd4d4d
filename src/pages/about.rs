use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::motion::reveal::{Reveal, RevealOptions};
use crate::motion::scrollwatch::AnchorLinks;
use crate::motion::stage::Stage;

const TIMELINE: &[(&str, &str)] = &[
    ("2015", "Two designers and a borrowed desk. First identity shipped."),
    ("2018", "Engineering joins the studio; we start building what we design."),
    ("2021", "Twenty people, three time zones, one shared review wall."),
    ("2024", "Campaign practice opens. Work shown in four countries."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().expect("window should exist");
            let document = window.document().expect("document should exist");

            let stage = Stage::resolve(&document);
            let reveal = Reveal::class_marker(RevealOptions::default(), &stage.reveal_targets);
            let lazy = Reveal::lazy_images(&stage.lazy_images);
            let anchors = AnchorLinks::wire(&window, &stage.anchor_links);

            // Timeline entries cascade in, each a step behind the previous.
            let timeline: Vec<Reveal> = stage
                .timeline_items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let item = item.clone();
                    Reveal::once(&item.clone(), move || {
                        let delay = index as u32 * config::TIMELINE_STEP_MS;
                        Timeout::new(delay, move || {
                            let _ = item.class_list().add_1("animate-timeline");
                        })
                        .forget();
                    })
                })
                .collect();

            move || {
                drop(timeline);
                drop(anchors);
                drop(lazy);
                drop(reveal);
            }
        },
        (),
    );

    html! {
        <div class="page page-about">
            <style>
                {r#"
                    .about-hero {
                        padding: 8rem 2rem 3rem;
                        background: linear-gradient(135deg, var(--primary-color), var(--dark-color));
                        color: #fff;
                    }
                    .about-hero h1 { font-size: 2.4rem; margin: 0; }
                    .mission-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                        max-width: 1080px;
                        margin: 3rem auto;
                        padding: 0 2rem;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.25rem;
                        max-width: 1080px;
                        margin: 2rem auto 4rem;
                        padding: 0 2rem;
                    }
                    .timeline {
                        list-style: none;
                        max-width: 720px;
                        margin: 2rem auto 4rem;
                        padding: 0 2rem;
                        border-left: 3px solid var(--primary-color);
                    }
                    .timeline-item {
                        opacity: 0;
                        transform: translateX(-20px);
                        padding: 1rem 0 1rem 1.5rem;
                        position: relative;
                    }
                    .timeline-item.animate-timeline {
                        opacity: 1;
                        transform: translateX(0);
                        transition: all 0.6s ease-out;
                    }
                    .timeline-item::before {
                        content: '';
                        position: absolute;
                        left: -8px;
                        top: 1.4rem;
                        width: 13px;
                        height: 13px;
                        border-radius: 50%;
                        background: var(--primary-color);
                    }
                    .timeline-year { font-weight: 700; color: var(--primary-color); }
                    .leaders-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 1080px;
                        margin: 2rem auto 6rem;
                        padding: 0 2rem;
                    }
                "#}
            </style>

            <section class="about-hero">
                <h1>{"A studio built around the work."}</h1>
            </section>

            <section class="mission-grid" aria-label="Mission and vision">
                <div class="value-card mission-card animate-left">
                    <h2>{"Mission"}</h2>
                    <p>{"Make ambitious brands legible: clear stories, considered design, dependable builds."}</p>
                </div>
                <div class="value-card vision-card animate-right">
                    <h2>{"Vision"}</h2>
                    <p>{"A studio where strategy, design, and engineering review the same wall."}</p>
                </div>
            </section>

            <section aria-label="Values">
                <h2 class="animate-on-scroll" style="text-align: center;">{"What we hold onto"}</h2>
                <div class="values-grid">
                    <div class="value-card animate-on-scroll stagger">
                        <h3>{"Craft"}</h3>
                        <p>{"Details carry the brand. We sweat them."}</p>
                    </div>
                    <div class="value-card animate-on-scroll stagger">
                        <h3>{"Candor"}</h3>
                        <p>{"Straight answers, even when they cost us the pitch."}</p>
                    </div>
                    <div class="value-card animate-on-scroll stagger">
                        <h3>{"Curiosity"}</h3>
                        <p>{"Every project teaches the next one."}</p>
                    </div>
                    <div class="value-card animate-on-scroll stagger">
                        <h3>{"Care"}</h3>
                        <p>{"Small team, long relationships."}</p>
                    </div>
                </div>
            </section>

            <section aria-label="History">
                <h2 class="animate-on-scroll" style="text-align: center;">{"How we got here"}</h2>
                <ol class="timeline">
                    { for TIMELINE.iter().map(|(year, entry)| html! {
                        <li class="timeline-item">
                            <span class="timeline-year">{*year}</span>
                            <p>{*entry}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section aria-label="Leadership">
                <h2 class="animate-on-scroll" style="text-align: center;">{"Leadership"}</h2>
                <div class="leaders-grid">
                    <div class="story-card animate-on-scroll stagger">
                        <h3>{"Mara Obeng"}</h3>
                        <p>{"Creative director. Identity systems and editorial design."}</p>
                    </div>
                    <div class="story-card animate-on-scroll stagger">
                        <h3>{"Jonas Leppänen"}</h3>
                        <p>{"Engineering lead. Websites that stay fast after launch."}</p>
                    </div>
                    <div class="story-card animate-on-scroll stagger">
                        <h3>{"Inés Duarte"}</h3>
                        <p>{"Strategy director. Positioning, naming, launch plans."}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
