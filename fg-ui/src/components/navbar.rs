//! Top navigation bar with the signed-in user and logout.

use crate::state::AppState;
use dioxus::prelude::*;
use fg_session::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.route)();
    let user_name = state.user.read().as_ref().map(|u| u.name.clone());

    rsx! {
        nav {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: #0b1120; border-bottom: 1px solid #1f2937;",
            button {
                style: "background: none; border: none; cursor: pointer; font-size: 20px; font-weight: 700; color: #22d3ee;",
                onclick: move |_| state.navigate(Route::Landing),
                "Flow Guard"
            }
            div {
                style: "display: flex; gap: 4px;",
                for route in Route::NAVIGATION {
                    {
                        let active = route == current;
                        let color = if active { "#22d3ee" } else { "#d1d5db" };
                        let title = route.title();
                        rsx! {
                            button {
                                key: "{title}",
                                style: "background: none; border: none; cursor: pointer; padding: 6px 10px; color: {color};",
                                onclick: move |_| state.navigate(route),
                                "{title}"
                            }
                        }
                    }
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center; color: #f9fafb;",
                if let Some(name) = user_name {
                    span { "{name}" }
                    button {
                        style: "background: none; border: 1px solid #374151; border-radius: 8px; padding: 6px 12px; color: #d1d5db; cursor: pointer;",
                        onclick: move |_| state.logout(),
                        "Logout"
                    }
                } else {
                    button {
                        style: "background: none; border: none; color: #d1d5db; cursor: pointer;",
                        onclick: move |_| state.navigate(Route::Login),
                        "Login"
                    }
                }
            }
        }
    }
}
