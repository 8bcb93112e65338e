use super::{bump, use_page};
use dioxus::prelude::*;
use fg_pages::{LoginPage, LoginStatus};
use fg_session::credentials::DemoCredentials;
use fg_session::routes::Route;
use fg_ui::components::ErrorDisplay;
use fg_ui::state::AppState;

const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 10px; margin: 4px 0 12px 0; border-radius: 8px; border: 1px solid #374151; background: #111827; color: #f9fafb;";

#[component]
pub fn LoginView() -> Element {
    let mut state = use_context::<AppState>();
    let (page, revision) = use_page(|ctx| Ok(LoginPage::mount(ctx)));
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { ErrorDisplay { message } },
    };

    // Leave for the landing page once the delayed attempt succeeds.
    {
        let page = page.clone();
        use_effect(move || {
            let _ = revision();
            if page.borrow().status() == LoginStatus::SignedIn {
                state.sync_user();
                state.navigate(Route::Landing);
            }
        });
    }

    let (email, password, remember, submitting, error) = {
        let view = page.borrow();
        (view.email.clone(), view.password.clone(), view.remember_me, view.is_submitting(), view.error())
    };
    let button_label = if submitting { "Signing in..." } else { "Sign In" };
    let demo_accounts = DemoCredentials::default();

    let on_submit = {
        let page = page.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            let session = state.session.peek().clone();
            page.borrow_mut().submit(&session);
            bump(revision);
        }
    };
    let on_email = {
        let page = page.clone();
        move |evt: Event<FormData>| page.borrow_mut().email = evt.value()
    };
    let on_password = {
        let page = page.clone();
        move |evt: Event<FormData>| page.borrow_mut().password = evt.value()
    };
    let on_remember = {
        let page = page.clone();
        move |evt: Event<FormData>| page.borrow_mut().remember_me = evt.checked()
    };

    rsx! {
        div {
            style: "max-width: 420px; margin: 48px auto; padding: 32px; border-radius: 24px; background: #111827; border: 1px solid #1f2937;",
            h1 { style: "margin: 0 0 4px 0; color: #22d3ee; text-align: center;", "Flow Guard" }
            p { style: "margin: 0 0 24px 0; color: #9ca3af; text-align: center;", "Sign in to your account" }

            if let Some(message) = error {
                ErrorDisplay { message: message.to_string() }
            }

            form {
                onsubmit: on_submit,
                label { "Email address" }
                input { r#type: "email", required: true, value: "{email}", style: INPUT_STYLE, oninput: on_email }
                label { "Password" }
                input { r#type: "password", required: true, value: "{password}", style: INPUT_STYLE, oninput: on_password }
                label {
                    style: "display: flex; gap: 6px; align-items: center; font-size: 13px; color: #d1d5db; margin-bottom: 16px;",
                    input { r#type: "checkbox", checked: remember, onchange: on_remember }
                    "Remember me"
                }
                button {
                    r#type: "submit",
                    disabled: submitting,
                    style: "width: 100%; padding: 12px; border-radius: 12px; border: none; background: #0891b2; color: white; font-weight: 600; cursor: pointer;",
                    "{button_label}"
                }
            }

            p {
                style: "margin-top: 16px; text-align: center; font-size: 13px; color: #9ca3af;",
                "Need access? "
                button {
                    style: "background: none; border: none; color: #22d3ee; cursor: pointer;",
                    onclick: move |_| state.navigate(Route::Signup),
                    "Request an account"
                }
            }

            div {
                style: "margin-top: 16px; padding: 12px; border-radius: 12px; background: rgba(8, 145, 178, 0.1); font-size: 12px; color: #d1d5db;",
                div { style: "color: #22d3ee; font-weight: 600; margin-bottom: 6px;", "Demo Credentials:" }
                for entry in demo_accounts.entries() {
                    div { key: "{entry.email}", "{entry.email} / {entry.password}" }
                }
            }
        }
    }
}
