use dioxus::prelude::*;

use crate::t;

use super::ChartModel;

#[component]
pub fn ChartPanel(chart: Signal<Option<ChartModel>>) -> Element {
    let model = chart();
    let meta = model.as_ref().map(|model| {
        t!(
            "chart-meta",
            rows = (model.dataset.records.len() as i64),
            categories = (model.palette.category_count() as i64)
        )
    });

    rsx! {
        section { class: "panel panel-chart",
            div { class: "panel__header",
                h2 { {t!("chart-title")} }
                if let Some(meta) = meta {
                    span { class: "panel__meta", "{meta}" }
                }
            }

            if let Some(model) = model {
                div { class: "panel-chart__frame", dangerous_inner_html: "{model.markup}" }
            } else {
                p { class: "panel__placeholder", {t!("chart-placeholder")} }
            }
        }
    }
}
