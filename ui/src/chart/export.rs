use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::dataset::Dataset;
use crate::t;

use super::ChartModel;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[component]
pub fn ChartExportPanel(chart: Signal<Option<ChartModel>>) -> Element {
    let model = chart();
    let row_count = model.as_ref().map(|m| m.dataset.records.len()).unwrap_or(0);
    let category_count = model
        .as_ref()
        .map(|m| m.palette.category_count())
        .unwrap_or(0);
    let markup_bytes = model.as_ref().map(|m| m.markup.len()).unwrap_or(0);

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("panel__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "panel__meta panel__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "panel__meta panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let svg_handler = move |_| {
        let Some(model) = chart.peek().clone() else {
            return;
        };
        deliver(status, busy, t!("export-working-svg"), async move {
            let delivery = perform_svg_export(model).await?;
            Ok(delivery_message(delivery))
        });
    };

    let csv_handler = move |_| {
        let Some(model) = chart.peek().clone() else {
            return;
        };
        deliver(status, busy, t!("export-working-csv"), async move {
            let delivery = perform_csv_export(model).await?;
            Ok(delivery_message(delivery))
        });
    };

    let json_handler = move |_| {
        let Some(model) = chart.peek().clone() else {
            return;
        };
        deliver(status, busy, t!("export-working-json"), async move {
            let delivery = perform_json_export(model).await?;
            Ok(delivery_message(delivery))
        });
    };

    let png_handler = move |_| {
        let Some(model) = chart.peek().clone() else {
            return;
        };
        deliver(status, busy, t!("export-working-png"), async move {
            let delivery = perform_png_export(model).await?;
            Ok(delivery_message(delivery))
        });
    };

    let copy_handler = move |_| {
        let Some(model) = chart.peek().clone() else {
            return;
        };
        deliver(status, busy, t!("export-working-copy"), async move {
            copy_to_clipboard(model.markup).await?;
            Ok(t!("export-done-copied"))
        });
    };

    rsx! {
        section { class: "panel panel-export",
            div { class: "panel__header",
                h2 { {t!("export-title")} }
            }

            if model.is_none() {
                p { class: "panel__placeholder", {t!("export-placeholder")} }
            } else {
                p { {t!("export-intro")} }

                ul { class: "panel-export__summary",
                    li { {t!("export-summary-rows", count = (row_count as i64))} }
                    li { {t!("export-summary-categories", count = (category_count as i64))} }
                    li { {t!("export-summary-bytes", count = (markup_bytes as i64))} }
                }

                div { class: "panel-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: svg_handler,
                        {t!("export-svg")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: csv_handler,
                        {t!("export-csv")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: json_handler,
                        {t!("export-json")}
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: png_handler,
                        {t!("export-png")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        disabled: busy(),
                        onclick: copy_handler,
                        {t!("export-copy")}
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

/// Run one export job: flip the busy flag, surface Working/Done/Error on
/// the status signal. Spawned on the browser task queue on wasm; blocked
/// on inline on native, where the jobs are short filesystem writes.
fn deliver<Fut>(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    working: String,
    job: Fut,
) where
    Fut: std::future::Future<Output = Result<String, String>> + 'static,
{
    if busy() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(working));

    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            match job.await {
                Ok(message) => status.set(ExportStatus::Done(message)),
                Err(err) => status.set(ExportStatus::Error(err)),
            }
            busy.set(false);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match futures::executor::block_on(job) {
            Ok(message) => status.set(ExportStatus::Done(message)),
            Err(err) => status.set(ExportStatus::Error(err)),
        }
        busy.set(false);
    }
}

fn delivery_message(delivery: Option<String>) -> String {
    match delivery {
        Some(path) => t!("export-done-saved", path = path),
        None => t!("export-done-download"),
    }
}

async fn perform_svg_export(model: ChartModel) -> Result<Option<String>, String> {
    let filename = format!("mekkoscope-chart-{}.svg", timestamp_slug());
    download_bytes(&filename, "image/svg+xml", model.markup.into_bytes()).await
}

async fn perform_csv_export(model: ChartModel) -> Result<Option<String>, String> {
    let csv = build_csv(&model.dataset);
    let filename = format!("mekkoscope-data-{}.csv", timestamp_slug());
    download_bytes(&filename, "text/csv", csv.into_bytes()).await
}

async fn perform_json_export(model: ChartModel) -> Result<Option<String>, String> {
    let json = serde_json::to_string_pretty(&model.dataset).map_err(|err| err.to_string())?;
    let filename = format!("mekkoscope-data-{}.json", timestamp_slug());
    download_bytes(&filename, "application/json", json.into_bytes()).await
}

async fn perform_png_export(model: ChartModel) -> Result<Option<String>, String> {
    let png_bytes = build_png(&model).await?;
    let filename = format!("mekkoscope-chart-{}.png", timestamp_slug());
    download_bytes(&filename, "image/png", png_bytes).await
}

/// The normalized dataset (typed, sorted) back as CSV: header row plus
/// one line per record.
fn build_csv(dataset: &Dataset) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(dataset.records.len() + 1);
    rows.push(dataset.columns.to_vec());
    for record in &dataset.records {
        rows.push(vec![
            record.label.clone(),
            record.width.to_string(),
            record.height.to_string(),
            record.category.clone(),
        ]);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Deliver bytes to the user. Web: Blob + object URL + a temporary
/// anchor click (returns `None`). Native: a file under the app data dir
/// (returns `Some(path)`).
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = native_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "Mekkoscope", "Mekkoscope")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

async fn build_png(model: &ChartModel) -> Result<Vec<u8>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        build_png_web(model).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        build_png_native(model)
    }
}

/// Web capture: paint the SVG markup onto a canvas through an
/// object-URL image, then decode the canvas data URL.
#[cfg(target_arch = "wasm32")]
async fn build_png_web(model: &ChartModel) -> Result<Vec<u8>, String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url};

    let markup = model.markup_with_background("#ffffff");
    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&markup));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create SVG URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(model.config.svg_width as u32);
    canvas.set_height(model.config.svg_height as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    image.set_src(&url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| "Image decode failed")?;

    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| "Unable to draw image")?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "Unable to serialise canvas")?;
    Url::revoke_object_url(&url).ok();

    let encoded = data_url.split(',').nth(1).ok_or("Malformed data URL")?;
    let bytes = {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| "PNG decode failed")?
    };

    Ok(bytes)
}

/// Native capture: rasterize the markup at 2× with resvg onto a white
/// pixmap and PNG-encode the result.
#[cfg(not(target_arch = "wasm32"))]
fn build_png_native(model: &ChartModel) -> Result<Vec<u8>, String> {
    use std::sync::Arc;

    const SCALE: f32 = 2.0;

    let markup = model.markup_with_background("#ffffff");

    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();
    let options = usvg::Options {
        fontdb: Arc::new(fonts),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(&markup, &options).map_err(|err| err.to_string())?;

    let size = tree.size();
    let width = (size.width() * SCALE).ceil() as u32;
    let height = (size.height() * SCALE).ceil() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or("Unable to allocate pixmap")?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(SCALE, SCALE),
        &mut pixmap.as_mut(),
    );

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .map_err(|err| err.to_string())?
            .write_image_data(pixmap.data())
            .map_err(|err| err.to_string())?;
    }

    Ok(buffer)
}
