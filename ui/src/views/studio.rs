use dioxus::prelude::*;

use crate::chart::{ChartExportPanel, ChartModel, ChartPanel, DataTablePanel};
use crate::ingest::StudioView;

#[component]
pub fn Studio() -> Element {
    // Re-render when the locale changes elsewhere (e.g. while on Home).
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Everything rendered below derives from this one signal; a new
    // submission swaps the model, so prior chart and table output is
    // replaced rather than appended to.
    let chart = use_signal(|| Option::<ChartModel>::None);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-studio",
            h1 { {crate::t!("page-studio-title")} }
            p { {crate::t!("page-studio-intro")} }

            StudioView { chart }

            div { class: "studio__panels",
                ChartPanel { chart }
                DataTablePanel { chart }
            }

            ChartExportPanel { chart }
        }
    }
}
