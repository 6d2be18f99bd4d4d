use chrono::{Datelike, Timelike, Utc, Weekday};
use yew::prelude::*;

use crate::components::notification::{ToastHost, ToastList, Toaster};
use crate::config;
use crate::forms::contact_form::ContactForm;
use crate::motion::reveal::{Reveal, RevealOptions};
use crate::motion::scrollwatch::AnchorLinks;
use crate::motion::stage::Stage;

/// The studio answers Monday to Friday, 08:00–17:00 local time.
fn is_office_hours(weekday: Weekday, hour: u32) -> bool {
    let weekday_open = !matches!(weekday, Weekday::Sat | Weekday::Sun);
    weekday_open && (8..17).contains(&hour)
}

#[function_component(Contact)]
pub fn contact() -> Html {
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

    let studio_now = Utc::now().with_timezone(&config::STUDIO_TZ);
    let open_now = is_office_hours(studio_now.weekday(), studio_now.hour());

    html! {
        <div class="page page-contact">
            <style>
                {r#"
                    .contact-hero {
                        padding: 8rem 2rem 3rem;
                        background: linear-gradient(135deg, var(--primary-color), var(--dark-color));
                        color: #fff;
                    }
                    .contact-hero h1 { font-size: 2.4rem; margin: 0; }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                        max-width: 1080px;
                        margin: 3rem auto 6rem;
                        padding: 0 2rem;
                    }
                    .contact-panel {
                        background: #fff;
                        border-radius: 14px;
                        padding: 2rem;
                        box-shadow: 0 10px 30px rgba(0,0,0,0.08);
                    }
                    .hours-chip {
                        display: inline-block;
                        padding: 0.3rem 0.9rem;
                        border-radius: 999px;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-top: 0.5rem;
                    }
                    .hours-chip.open { background: rgba(39, 120, 80, 0.15); color: #277850; }
                    .hours-chip.closed { background: rgba(160, 60, 60, 0.12); color: #a03c3c; }
                    .map-placeholder {
                        margin-top: 1.5rem;
                        height: 220px;
                        border-radius: 10px;
                        background: repeating-linear-gradient(
                            45deg,
                            rgba(44, 90, 160, 0.08),
                            rgba(44, 90, 160, 0.08) 12px,
                            rgba(44, 62, 80, 0.08) 12px,
                            rgba(44, 62, 80, 0.08) 24px
                        );
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--muted-color);
                    }
                "#}
            </style>

            <section class="contact-hero">
                <h1>{"Tell us what you're making."}</h1>
            </section>

            <div class="contact-grid">
                <div class="contact-panel animate-left">
                    <h2>{"Start a project"}</h2>
                    <ContactForm toaster={toaster.clone()} />
                </div>
                <div class="contact-panel animate-right">
                    <h2>{"Visit or call"}</h2>
                    <p>{"Rua das Gaivotas 14, Lisbon"}</p>
                    <p>{"hello@wavecrest.studio"}</p>
                    <p>{"+351 21 555 0134"}</p>
                    <h3>{"Office hours"}</h3>
                    <p>{"Monday to Friday, 08:00–17:00"}</p>
                    if open_now {
                        <span class="hours-chip open">{"Open now"}</span>
                    } else {
                        <span class="hours-chip closed">{"Closed — leave a message"}</span>
                    }
                    <div class="map-placeholder" role="img" aria-label="Map of the studio location">
                        {"Map"}
                    </div>
                </div>
            </div>

            <ToastHost toasts={(*toasts).toasts.clone()} toaster={toaster} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_working_hours_are_open() {
        assert!(is_office_hours(Weekday::Wed, 9));
        assert!(is_office_hours(Weekday::Mon, 8));
        assert!(is_office_hours(Weekday::Fri, 16));
    }

    #[test]
    fn evenings_and_weekends_are_closed() {
        assert!(!is_office_hours(Weekday::Fri, 17));
        assert!(!is_office_hours(Weekday::Sat, 12));
        assert!(!is_office_hours(Weekday::Sun, 9));
        assert!(!is_office_hours(Weekday::Tue, 7));
    }
}
