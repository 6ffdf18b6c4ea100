use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::ChartModel;

/// Precomputed display row; the category cell carries its assigned fill
/// so the table doubles as the legend.
#[derive(Clone, PartialEq)]
struct TableRow {
    number: usize,
    label: String,
    width: String,
    height: String,
    category: String,
    color: &'static str,
}

#[component]
pub fn DataTablePanel(chart: Signal<Option<ChartModel>>) -> Element {
    let model = chart();

    let columns = model.as_ref().map(|model| model.dataset.columns.clone());
    let rows: Vec<TableRow> = model
        .as_ref()
        .map(|model| {
            model
                .dataset
                .records
                .iter()
                .enumerate()
                .map(|(idx, record)| TableRow {
                    number: idx + 1,
                    label: record.label.clone(),
                    width: format::value(record.width),
                    height: format::value(record.height),
                    category: record.category.clone(),
                    color: model.palette.color_of(&record.category),
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        section { class: "panel panel-table",
            div { class: "panel__header",
                h2 { {t!("table-title")} }
            }

            if let Some(columns) = columns {
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-col-number")} }
                            for name in columns.iter() {
                                th { "{name}" }
                            }
                        }
                    }
                    tbody {
                        for row in rows.into_iter() {
                            tr {
                                td { class: "data-table__number", "{row.number}" }
                                td { "{row.label}" }
                                td { class: "data-table__numeric", "{row.width}" }
                                td { class: "data-table__numeric", "{row.height}" }
                                td {
                                    class: "data-table__category",
                                    style: "background-color: {row.color};",
                                    "{row.category}"
                                }
                            }
                        }
                    }
                }
            } else {
                p { class: "panel__placeholder", {t!("table-placeholder")} }
            }
        }
    }
}
