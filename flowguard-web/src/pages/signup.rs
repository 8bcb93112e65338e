use super::{bump, use_page};
use dioxus::prelude::*;
use fg_core::forms::SIGNUP_ROLES;
use fg_pages::{SignupPage, SignupStatus};
use fg_session::routes::Route;
use fg_ui::components::ErrorDisplay;
use fg_ui::state::AppState;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px; margin: 4px 0 12px 0; border-radius: 8px; border: 1px solid #374151; background: #111827; color: #f9fafb;";

#[component]
pub fn SignupView() -> Element {
    let mut state = use_context::<AppState>();
    let (page, revision) = use_page(|ctx| Ok(SignupPage::mount(ctx)));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    let (form, status, error) = {
        let view = page.borrow();
        (view.form.clone(), view.status(), view.error())
    };

    if status == SignupStatus::Submitted {
        return rsx! {
            div {
                style: "max-width: 420px; margin: 48px auto; padding: 32px; border-radius: 24px; background: #111827; text-align: center;",
                h2 { "Registration Submitted" }
                p { style: "color: #d1d5db;", "Your account request has been submitted for administrator approval. You'll receive an email confirmation within 24 hours." }
                button {
                    style: "width: 100%; padding: 12px; border-radius: 12px; border: none; background: #0891b2; color: white; font-weight: 600; cursor: pointer;",
                    onclick: move |_| state.navigate(Route::Login),
                    "Return to Login"
                }
            }
        };
    }

    let submitting = status == SignupStatus::Submitting;
    let button_label = if submitting { "Submitting..." } else { "Request Access" };

    // One setter per form field; each writes straight into the page's form.
    macro_rules! bind {
        ($field:ident) => {{
            let page = page.clone();
            move |evt: Event<FormData>| page.borrow_mut().form.$field = evt.value()
        }};
    }

    let on_submit = {
        let page = page.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            page.borrow_mut().submit();
            bump(revision);
        }
    };

    rsx! {
        div {
            style: "max-width: 520px; margin: 32px auto; padding: 32px; border-radius: 24px; background: #111827; border: 1px solid #1f2937;",
            h1 { style: "margin: 0 0 4px 0; color: #22d3ee; text-align: center;", "Request Access" }
            p { style: "margin: 0 0 24px 0; color: #9ca3af; text-align: center;", "Accounts are approved by your administrator." }

            if let Some(e) = error {
                ErrorDisplay { message: e.to_string() }
            }

            form {
                onsubmit: on_submit,
                div {
                    style: "display: flex; gap: 12px;",
                    div { style: "flex: 1;",
                        label { "First Name" }
                        input { required: true, value: "{form.first_name}", style: INPUT_STYLE, oninput: bind!(first_name) }
                    }
                    div { style: "flex: 1;",
                        label { "Last Name" }
                        input { required: true, value: "{form.last_name}", style: INPUT_STYLE, oninput: bind!(last_name) }
                    }
                }
                label { "Work Email" }
                input { r#type: "email", required: true, value: "{form.email}", style: INPUT_STYLE, oninput: bind!(email) }
                label { "Organization" }
                input { required: true, value: "{form.organization}", style: INPUT_STYLE, oninput: bind!(organization) }
                label { "Role" }
                select {
                    required: true,
                    style: INPUT_STYLE,
                    onchange: bind!(role),
                    option { value: "", selected: form.role.is_empty(), "Select your role" }
                    for role in SIGNUP_ROLES {
                        option { key: "{role}", value: "{role}", selected: form.role == role, "{role}" }
                    }
                }
                label { "Phone" }
                input { r#type: "tel", value: "{form.phone}", style: INPUT_STYLE, oninput: bind!(phone) }
                label { "Password" }
                input { r#type: "password", required: true, value: "{form.password}", style: INPUT_STYLE, oninput: bind!(password) }
                label { "Confirm Password" }
                input { r#type: "password", required: true, value: "{form.confirm_password}", style: INPUT_STYLE, oninput: bind!(confirm_password) }
                button {
                    r#type: "submit",
                    disabled: submitting,
                    style: "width: 100%; padding: 12px; border-radius: 12px; border: none; background: #0891b2; color: white; font-weight: 600; cursor: pointer;",
                    "{button_label}"
                }
            }

            p {
                style: "margin-top: 16px; text-align: center; font-size: 13px; color: #9ca3af;",
                "Already have an account? "
                button {
                    style: "background: none; border: none; color: #22d3ee; cursor: pointer;",
                    onclick: move |_| state.navigate(Route::Login),
                    "Sign in"
                }
            }
        }
    }
}
