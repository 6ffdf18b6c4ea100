use dioxus::prelude::*;

/// The schema in one glance; shown verbatim so it can be pasted straight
/// into the studio.
const EXAMPLE_CSV: &str = "\
segment,share,growth,division
North,25,12,hardware
South,40,-3,software
Online,15,30,services
Retail,20,8,hardware";

#[component]
pub fn Guide() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-guide",
            h1 { {crate::t!("page-guide-title")} }
            p { {crate::t!("page-guide-intro")} }

            h2 { {crate::t!("guide-schema-title")} }
            ul { class: "page-guide__schema",
                li { {crate::t!("guide-schema-label")} }
                li { {crate::t!("guide-schema-width")} }
                li { {crate::t!("guide-schema-height")} }
                li { {crate::t!("guide-schema-category")} }
            }

            h2 { {crate::t!("guide-rules-title")} }
            ul { class: "page-guide__rules",
                li { {crate::t!("guide-rule-columns")} }
                li { {crate::t!("guide-rule-numeric")} }
                li { {crate::t!("guide-rule-width")} }
                li { {crate::t!("guide-rule-categories")} }
            }

            h2 { {crate::t!("guide-example-title")} }
            pre { class: "page-guide__example",
                code { "{EXAMPLE_CSV}" }
            }
            p { class: "page-guide__note", {crate::t!("guide-example-note")} }
        }
    }
}
