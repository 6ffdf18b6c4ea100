use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::chart::ChartModel;
use crate::core::config::ChartConfig;
use crate::core::dataset::Dataset;
use crate::core::timing;
use crate::t;

use super::{error_message, sample_csv};

#[cfg(debug_assertions)]
use crate::core::platform;

const PREVIEW_DEBOUNCE_MS: u32 = 250;

/// The currently selected upload: one reference, overwritten on every
/// pick, cleared when the picker is emptied.
#[derive(Clone)]
struct SelectedFile {
    name: String,
    engine: Arc<dyn FileEngine>,
}

impl SelectedFile {
    async fn read(&self) -> Option<String> {
        self.engine.read_file_to_string(&self.name).await
    }
}

enum StudioEvent {
    Submit,
    Clear,
}

#[component]
pub fn StudioView(chart: Signal<Option<ChartModel>>) -> Element {
    let selected_file = use_signal(|| Option::<SelectedFile>::None);
    let mut draft_text = use_signal(String::new);
    let mut preview_generation = use_signal(|| 0u64);
    let mut preview_line = use_signal(|| Option::<String>::None);
    let status_line = use_signal(|| t!("studio-status-idle"));
    let error_line = use_signal(|| Option::<String>::None);

    let coroutine = {
        let mut selected = selected_file;
        let mut chart_signal = chart;
        let mut draft = draft_text;
        let mut status = status_line;
        let mut error = error_line;
        let mut preview = preview_line;

        use_coroutine(move |mut rx: UnboundedReceiver<StudioEvent>| async move {
            while let Some(event) = rx.next().await {
                match event {
                    StudioEvent::Submit => {
                        error.set(None);
                        status.set(t!("studio-status-reading"));

                        // The file, when present, wins over pasted text;
                        // reading it is the pipeline's one suspension point.
                        let source = selected.peek().clone();
                        let text = match source {
                            Some(file) => match file.read().await {
                                Some(text) => text,
                                None => {
                                    chart_signal.set(None);
                                    status.set(t!("studio-status-idle"));
                                    error.set(Some(t!("err-file-read")));
                                    continue;
                                }
                            },
                            None => draft.peek().clone(),
                        };

                        match Dataset::from_csv(&text) {
                            Ok(dataset) => {
                                let rows = dataset.records.len();
                                let categories = dataset.distinct_categories().len();
                                let model = ChartModel::build(dataset, ChartConfig::default());

                                #[cfg(debug_assertions)]
                                println!(
                                    "[ingest] rendered {rows} rows on {}",
                                    platform::platform_label()
                                );

                                status.set(t!(
                                    "studio-status-rendered",
                                    rows = (rows as i64),
                                    categories = (categories as i64)
                                ));
                                chart_signal.set(Some(model));
                            }
                            Err(err) => {
                                chart_signal.set(None);
                                status.set(t!("studio-status-idle"));
                                error.set(Some(error_message(&err)));
                            }
                        }
                    }
                    StudioEvent::Clear => {
                        selected.set(None);
                        chart_signal.set(None);
                        draft.set(String::new());
                        error.set(None);
                        preview.set(None);
                        status.set(t!("studio-status-idle"));
                    }
                }
            }
        })
    };

    let can_submit = selected_file().is_some() || !draft_text().trim().is_empty();
    let selected_label = selected_file()
        .as_ref()
        .map(|file| t!("studio-selected-file", name = file.name.as_str()));

    let on_file_change = {
        let mut selected = selected_file;
        move |evt: FormEvent| {
            let picked = evt.files().and_then(|engine| {
                engine
                    .files()
                    .first()
                    .cloned()
                    .map(|name| SelectedFile { name, engine })
            });

            #[cfg(debug_assertions)]
            {
                match &picked {
                    Some(file) => println!("[ingest] selected {}", file.name),
                    None => println!("[ingest] selection cleared"),
                }
            }

            selected.set(picked);
        }
    };

    let on_text_input = move |evt: FormEvent| {
        let text = evt.value();
        draft_text.set(text.clone());

        if text.trim().is_empty() {
            preview_line.set(None);
            return;
        }

        // Debounce: only the newest generation publishes its preview.
        let generation = preview_generation() + 1;
        preview_generation.set(generation);
        spawn(async move {
            timing::sleep_ms(PREVIEW_DEBOUNCE_MS).await;
            if *preview_generation.peek() != generation {
                return;
            }
            preview_line.set(Some(preview_of(&text)));
        });
    };

    let on_sample = move |_| {
        let csv = sample_csv();
        preview_line.set(Some(preview_of(&csv)));
        draft_text.set(csv);
    };

    rsx! {
        form { class: "studio-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                coroutine.send(StudioEvent::Submit);
            },

            div { class: "studio-form__field",
                label { r#for: "data-file", {t!("studio-file-label")} }
                input {
                    id: "data-file",
                    r#type: "file",
                    accept: ".csv",
                    onchange: on_file_change,
                }
                span { class: "studio-form__hint", {t!("studio-file-hint")} }
                if let Some(label) = selected_label {
                    span { class: "studio-form__selected", "{label}" }
                }
            }

            div { class: "studio-form__field",
                label { r#for: "csv-input", {t!("studio-paste-label")} }
                textarea {
                    id: "csv-input",
                    class: "studio-form__textarea",
                    rows: "8",
                    placeholder: t!("studio-paste-placeholder"),
                    value: "{draft_text}",
                    oninput: on_text_input,
                }
                if let Some(preview) = preview_line() {
                    span { class: "studio-form__preview", "{preview}" }
                }
            }

            div { class: "studio-form__actions",
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: !can_submit,
                    {t!("studio-submit")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: on_sample,
                    {t!("studio-sample")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| coroutine.send(StudioEvent::Clear),
                    {t!("studio-clear")}
                }
            }

            p { class: "studio-form__status", "{status_line}" }
            if let Some(error) = error_line() {
                p { class: "studio-form__error", "{error}" }
            }
        }
    }
}

fn preview_of(text: &str) -> String {
    match Dataset::from_csv(text) {
        Ok(dataset) => t!(
            "studio-preview-ok",
            rows = (dataset.records.len() as i64),
            categories = (dataset.distinct_categories().len() as i64)
        ),
        Err(err) => error_message(&err),
    }
}
