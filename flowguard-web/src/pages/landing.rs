use super::Panel;
use dioxus::prelude::*;
use fg_session::routes::Route;
use fg_ui::state::AppState;

/// (title, description)
const FEATURES: [(&str, &str); 6] = [
    ("Real-Time Monitoring", "24/7 surveillance of water levels across your entire stormwater network with IoT sensors"),
    ("AI Predictions", "Advanced machine learning models predict overflow risks with 94%+ accuracy"),
    ("Smart Alerts", "Instant notifications via SMS, push, and email when risks are detected"),
    ("Live Dashboard", "Interactive maps and real-time graphs for comprehensive monitoring"),
    ("Sustainability", "Prevent pollution and protect waterways with proactive management"),
    ("Cost Savings", "Avoid expensive emergency repairs and regulatory fines"),
];

const AUDIENCES: [(&str, &str); 4] = [
    ("Municipal Authorities", "Wastewater management for cities and towns"),
    ("Flood-Prone Areas", "Residential communities at risk"),
    ("Industrial Facilities", "Compliance and environmental protection"),
    ("Environmental Agencies", "Water quality monitoring and protection"),
];

/// (value, label)
const STATS: [(&str, &str); 4] = [
    ("95%", "Prediction Accuracy"),
    ("60%", "Reduction in Overflows"),
    ("<5min", "Response Time"),
    ("24/7", "Monitoring Coverage"),
];

const CARD_STYLE: &str = "flex: 1 1 220px; padding: 16px; border-radius: 12px; background: #1f2937; border: 1px solid #374151;";

#[component]
pub fn LandingView() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        section {
            style: "padding: 48px 16px; text-align: center;",
            span { style: "padding: 6px 16px; border-radius: 999px; border: 1px solid #0e7490; color: #67e8f9; font-size: 13px;", "AI-Powered Stormwater Management" }
            h1 { style: "margin: 24px 0 12px 0; font-size: 48px;", "Flow Guard" }
            p { style: "font-size: 20px; color: #e5e7eb;", "Prevent storm overflows before they happen with IoT sensors and AI predictions" }
            p { style: "color: #9ca3af;", "Real-time monitoring, predictive analytics, and smart alerts to protect water quality and prevent environmental damage" }
            div {
                style: "display: flex; gap: 16px; justify-content: center; margin-top: 24px;",
                button {
                    style: "padding: 14px 28px; border-radius: 12px; border: none; background: #0891b2; color: white; font-weight: 600; cursor: pointer;",
                    onclick: move |_| state.navigate(Route::Contact),
                    "Book a Demo"
                }
                button {
                    style: "padding: 14px 28px; border-radius: 12px; border: 2px solid #9ca3af; background: none; color: #e5e7eb; font-weight: 600; cursor: pointer;",
                    onclick: move |_| state.navigate(Route::Dashboard),
                    "View Dashboard"
                }
            }
        }

        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            for (value, label) in STATS {
                div { key: "{label}", style: "{CARD_STYLE} text-align: center;",
                    div { style: "font-size: 32px; font-weight: 700; color: #22d3ee;", "{value}" }
                    div { style: "color: #d1d5db;", "{label}" }
                }
            }
        }

        Panel { title: "Comprehensive Features".to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for (title, description) in FEATURES {
                    div { key: "{title}", style: CARD_STYLE,
                        h3 { style: "margin: 0 0 6px 0;", "{title}" }
                        p { style: "margin: 0; color: #9ca3af;", "{description}" }
                    }
                }
            }
        }

        Panel { title: "Who We Serve".to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for (title, description) in AUDIENCES {
                    div { key: "{title}", style: CARD_STYLE,
                        h3 { style: "margin: 0 0 6px 0;", "{title}" }
                        p { style: "margin: 0; color: #9ca3af;", "{description}" }
                    }
                }
            }
        }

        section {
            style: "margin: 24px 0; padding: 32px; border-radius: 16px; text-align: center; background: #0e7490;",
            h2 { style: "margin: 0 0 8px 0;", "Ready to Get Started?" }
            p { "See how Flow Guard can protect your community's waterways." }
            button {
                style: "padding: 12px 24px; border-radius: 12px; border: none; background: white; color: #0e7490; font-weight: 600; cursor: pointer;",
                onclick: move |_| state.navigate(Route::Contact),
                "Contact Us"
            }
        }
    }
}
