//! Image Uploader (mock)
//!
//! Admin demo: reads a selected file into a data URL for preview and
//! simulates an upload. Everything stays in memory.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};

/// A selected file awaiting its simulated upload
#[derive(Clone, PartialEq)]
pub struct PendingImage {
    pub file_name: String,
    pub data_url: String,
}

#[component]
pub fn ImageUploader() -> impl IntoView {
    let (pending, set_pending) = signal::<Option<PendingImage>>(None);
    let (uploading, set_uploading) = signal(false);
    let (uploaded, set_uploaded) = signal(Vec::<String>::new());

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                read_file(file, set_pending);
            }
        }
    };

    let on_upload = move |_| {
        let Some(image) = pending.get() else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            // Simulated upload: the image never leaves the page
            TimeoutFuture::new(1_200).await;
            web_sys::console::log_1(
                &format!("[ADMIN] kept {} in memory", image.file_name).into(),
            );
            set_uploaded.update(|names| names.push(image.file_name.clone()));
            set_pending.set(None);
            set_uploading.set(false);
        });
    };

    view! {
        <div class="image-uploader">
            <input type="file" accept="image/*" on:change=on_change/>

            {move || pending.get().map(|image| view! {
                <div class="upload-preview">
                    <img src=image.data_url alt=image.file_name.clone()/>
                    <span>{image.file_name}</span>
                </div>
            })}

            <button
                class="btn-primary"
                disabled=move || uploading.get() || pending.get().is_none()
                on:click=on_upload
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>

            <Show when=move || !uploaded.get().is_empty()>
                <p class="upload-note">
                    {move || {
                        format!(
                            "{} image(s) uploaded this session (in memory only)",
                            uploaded.get().len()
                        )
                    }}
                </p>
            </Show>
        </div>
    }
}

fn read_file(file: File, set_pending: WriteSignal<Option<PendingImage>>) {
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_pending.set(Some(PendingImage {
                    file_name: file_name.clone(),
                    data_url,
                }));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
