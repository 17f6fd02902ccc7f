use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ConsoleSink, ContactDraft};

#[derive(Clone, PartialEq)]
enum Notice {
    Sent,
    Failed(String),
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let notice = use_state(|| None::<Notice>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut draft = ContactDraft {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            match draft.submit(&ConsoleSink) {
                Ok(_) => {
                    name.set(draft.name);
                    email.set(draft.email);
                    message.set(draft.message);
                    notice.set(Some(Notice::Sent));
                }
                Err(err) => {
                    notice.set(Some(Notice::Failed(err.to_string())));
                }
            }
        })
    };

    html! {
        <div class="card contact-card">
            <h3>{"Send us a message"}</h3>
            <form onsubmit={onsubmit}>
                <div class="form-field">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" value={(*name).clone()} oninput={on_name} />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" value={(*email).clone()} oninput={on_email} />
                </div>
                <div class="form-field">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" rows="5" value={(*message).clone()} oninput={on_message} />
                </div>
                {
                    match &*notice {
                        Some(Notice::Sent) => html! {
                            <p class="form-notice success">{"Thanks! We'll get back to you soon."}</p>
                        },
                        Some(Notice::Failed(reason)) => html! {
                            <p class="form-notice error">{reason}</p>
                        },
                        None => html! {},
                    }
                }
                <button type="submit" class="primary-button">{"Submit"}</button>
            </form>
        </div>
    }
}
