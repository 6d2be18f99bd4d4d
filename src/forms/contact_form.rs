use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toaster;
use crate::config;
use crate::forms::validate::{validate, FieldError, FieldKind};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub toaster: Toaster,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);

    let name_error = use_state(|| None::<FieldError>);
    let email_error = use_state(|| None::<FieldError>);
    let phone_error = use_state(|| None::<FieldError>);
    let message_error = use_state(|| None::<FieldError>);

    let sending = use_state(|| false);

    let on_name = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            // Inline errors clear on the next input to the field.
            name_error.set(None);
        })
    };
    let on_email = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            email_error.set(None);
        })
    };
    let on_phone = {
        let phone = phone.clone();
        let phone_error = phone_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
            phone_error.set(None);
        })
    };
    let on_message = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
            message_error.set(None);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let phone_error = phone_error.clone();
        let message_error = message_error.clone();
        let sending = sending.clone();
        let toaster = props.toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let checks = [
                (FieldKind::Text, (*name).clone(), name_error.clone()),
                (FieldKind::Email, (*email).clone(), email_error.clone()),
                (FieldKind::Phone, (*phone).clone(), phone_error.clone()),
                (FieldKind::Text, (*message).clone(), message_error.clone()),
            ];
            let mut ok = true;
            for (kind, value, slot) in checks {
                match validate(kind, &value) {
                    Ok(()) => slot.set(None),
                    Err(error) => {
                        slot.set(Some(error));
                        ok = false;
                    }
                }
            }
            if !ok {
                return;
            }

            sending.set(true);
            log::info!("contact form accepted, simulating delivery");
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let sending = sending.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_SEND_MS).await;
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                sending.set(false);
                toaster.success("Message sent! We'll get back to you soon.");
            });
        })
    };

    let field_class = |error: &Option<FieldError>| {
        classes!("form-control", error.is_some().then_some("is-invalid"))
    };
    let error_html = |error: &Option<FieldError>| match error {
        Some(error) => html! { <div class="error-message">{error.message()}</div> },
        None => html! {},
    };

    html! {
        <form class="contact-form" novalidate=true {onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    class={field_class(&name_error)}
                    value={(*name).clone()}
                    oninput={on_name}
                    required=true
                />
                { error_html(&name_error) }
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    class={field_class(&email_error)}
                    value={(*email).clone()}
                    oninput={on_email}
                    required=true
                />
                { error_html(&email_error) }
            </div>
            <div class="form-group">
                <label for="contact-phone">{"Phone"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    class={field_class(&phone_error)}
                    value={(*phone).clone()}
                    oninput={on_phone}
                    required=true
                />
                { error_html(&phone_error) }
            </div>
            <div class="form-group">
                <label for="contact-message">{"How can we help?"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    class={field_class(&message_error)}
                    value={(*message).clone()}
                    oninput={on_message}
                    required=true
                />
                { error_html(&message_error) }
            </div>
            <button type="submit" class="btn-custom" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send message" } }
            </button>
        </form>
    }
}
