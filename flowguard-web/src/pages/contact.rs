use super::{bump, use_page, Panel};
use dioxus::prelude::*;
use fg_core::forms::ContactField;
use fg_pages::{ContactPage, ContactStatus};
use fg_ui::components::ErrorDisplay;
use std::cell::RefCell;
use std::rc::Rc;

const FIELDS: [(ContactField, &str, &str); 4] = [
    (ContactField::Name, "Full Name *", "Enter your full name"),
    (ContactField::Email, "Email Address *", "Enter your email address"),
    (ContactField::Company, "Company/Organization *", "Enter your company or organization name"),
    (
        ContactField::Message,
        "Message *",
        "Tell us about your stormwater management needs and how we can help...",
    ),
];

fn field_value(page: &ContactPage, field: ContactField) -> String {
    let form = page.form();
    match field {
        ContactField::Name => form.name.clone(),
        ContactField::Email => form.email.clone(),
        ContactField::Company => form.company.clone(),
        ContactField::Message => form.message.clone(),
    }
}

fn input_style(invalid: bool) -> String {
    let border = if invalid { "#ef4444" } else { "#374151" };
    format!("width: 100%; box-sizing: border-box; padding: 10px; margin: 4px 0; border-radius: 8px; border: 1px solid {border}; background: #111827; color: #f9fafb;")
}

fn on_edit(
    page: Rc<RefCell<ContactPage>>,
    field: ContactField,
    revision: Signal<u64>,
) -> impl FnMut(Event<FormData>) {
    move |evt| {
        page.borrow_mut().edit(field, &evt.value());
        bump(revision);
    }
}

#[component]
pub fn ContactView() -> Element {
    let (page, revision) = use_page(|ctx| Ok(ContactPage::mount(ctx)));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    let (status, rows) = {
        let view = page.borrow();
        let errors = view.errors();
        let rows: Vec<_> = FIELDS
            .iter()
            .map(|(field, label, placeholder)| {
                let error = errors.get(*field).map(|e| e.to_string());
                (*field, *label, *placeholder, field_value(&view, *field), error)
            })
            .collect();
        (view.status(), rows)
    };
    let submitting = status == ContactStatus::Submitting;
    let button_label = if submitting { "Sending..." } else { "Send Message" };

    let on_submit = {
        let page = page.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            page.borrow_mut().submit();
            bump(revision);
        }
    };

    rsx! {
        h1 { style: "margin: 8px 0;", "Contact Us" }
        p { style: "color: #9ca3af;", "Ready to transform your stormwater management? Get in touch with our team." }

        Panel { title: "Send us a message".to_string(),
            if status == ContactStatus::Sent {
                div {
                    style: "padding: 16px; margin-bottom: 12px; border-radius: 12px; background: rgba(16, 185, 129, 0.15); border: 1px solid rgba(16, 185, 129, 0.4);",
                    h3 { style: "margin: 0 0 4px 0;", "Message Sent Successfully!" }
                    p { style: "margin: 0; color: #d1d5db;", "Thank you for contacting Flow Guard. We'll get back to you within 24 hours." }
                }
            }
            form {
                onsubmit: on_submit,
                for (field, label, placeholder, value, error) in rows {
                    div {
                        key: "{label}",
                        style: "margin-bottom: 12px;",
                        label { style: "font-size: 13px; color: #d1d5db;", "{label}" }
                        if field == ContactField::Message {
                            textarea {
                                rows: "5",
                                placeholder: "{placeholder}",
                                value: "{value}",
                                style: input_style(error.is_some()),
                                oninput: on_edit(page.clone(), field, revision),
                            }
                        } else {
                            input {
                                placeholder: "{placeholder}",
                                value: "{value}",
                                style: input_style(error.is_some()),
                                oninput: on_edit(page.clone(), field, revision),
                            }
                        }
                        if let Some(message) = error {
                            p { style: "margin: 2px 0 0 0; font-size: 12px; color: #f87171;", "{message}" }
                        }
                    }
                }
                button {
                    r#type: "submit",
                    disabled: submitting,
                    style: "padding: 12px 24px; border-radius: 12px; border: none; background: #0891b2; color: white; font-weight: 600; cursor: pointer;",
                    "{button_label}"
                }
            }
        }
    }
}
