use super::Panel;
use dioxus::prelude::*;

const PILLARS: [(&str, &str); 3] = [
    ("Protect", "Safeguard water quality and prevent environmental contamination through proactive monitoring"),
    ("Preserve", "Maintain infrastructure integrity and extend the lifespan of your stormwater systems"),
    ("Progress", "Advance smart city technology and sustainable urban development practices"),
];

const STEPS: [(&str, &str); 3] = [
    ("IoT Sensor Network", "Deploy intelligent sensors throughout the stormwater infrastructure to monitor water levels, flow rates, and system conditions in real-time."),
    ("AI Analysis", "Machine learning algorithms process sensor data, historical patterns, and weather forecasts to predict potential overflow events with high accuracy."),
    ("Smart Response", "Automated systems trigger preventive measures and alert municipal staff, enabling proactive response before critical situations develop."),
];

const BENEFITS: [&str; 5] = [
    "Prevent environmental contamination",
    "Reduce infrastructure damage costs",
    "Improve public safety",
    "Ensure regulatory compliance",
    "Optimize maintenance schedules",
];

const SDGS: [(&str, &str); 4] = [
    ("SDG 6", "Clean Water & Sanitation"),
    ("SDG 11", "Sustainable Cities"),
    ("SDG 13", "Climate Action"),
    ("SDG 14", "Life Below Water"),
];

#[component]
pub fn AboutView() -> Element {
    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, description))| (i + 1, *title, *description));

    rsx! {
        h1 { style: "margin: 8px 0;", "About Flow Guard" }
        p { style: "color: #9ca3af;", "Revolutionizing stormwater management through cutting-edge IoT technology and artificial intelligence" }

        Panel { title: "Our Mission".to_string(),
            p { style: "color: #d1d5db;", "To protect our waterways and communities by preventing stormwater overflows through intelligent monitoring, predictive analytics, and proactive response systems." }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for (title, description) in PILLARS {
                    div { key: "{title}", style: "flex: 1 1 200px; padding: 12px; border-radius: 12px; background: #1f2937;",
                        h3 { style: "margin: 0 0 6px 0;", "{title}" }
                        p { style: "margin: 0; color: #9ca3af;", "{description}" }
                    }
                }
            }
        }

        Panel { title: "How It Works".to_string(),
            for (number, title, description) in steps {
                div { key: "{title}", style: "display: flex; gap: 12px; margin-bottom: 12px;",
                    span { style: "width: 32px; height: 32px; flex-shrink: 0; border-radius: 8px; background: #0891b2; text-align: center; line-height: 32px; font-weight: 700;", "{number}" }
                    div {
                        h4 { style: "margin: 0 0 4px 0;", "{title}" }
                        p { style: "margin: 0; color: #9ca3af;", "{description}" }
                    }
                }
            }
        }

        Panel { title: "Key Benefits".to_string(),
            ul { style: "margin: 0; padding-left: 20px; color: #e5e7eb;",
                for benefit in BENEFITS {
                    li { key: "{benefit}", "{benefit}" }
                }
            }
        }

        Panel { title: "Sustainable Development Goals".to_string(),
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for (goal, title) in SDGS {
                    div { key: "{goal}", style: "flex: 1 1 160px; padding: 12px; border-radius: 12px; background: #1f2937;",
                        div { style: "font-weight: 700; color: #34d399;", "{goal}" }
                        div { style: "color: #d1d5db;", "{title}" }
                    }
                }
            }
        }
    }
}
