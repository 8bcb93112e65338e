//! Labelled dropdown used by the filter panels and chart selectors.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: String,
    /// (value, label) pairs
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub onchange: EventHandler<String>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        label {
            style: "display: flex; gap: 6px; align-items: center; font-size: 13px; color: #d1d5db;",
            "{props.label}"
            select {
                style: "background: #111827; color: #f3f4f6; border: 1px solid #374151; border-radius: 6px; padding: 4px 8px;",
                onchange: move |evt: Event<FormData>| props.onchange.call(evt.value()),
                for (value, text) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.selected,
                        "{text}"
                    }
                }
            }
        }
    }
}
