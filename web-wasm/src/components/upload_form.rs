//! Upload form component
//!
//! File chooser (click or drag & drop) plus the submit control. The
//! chooser only hands the chosen `File` up to the page; submission
//! itself runs there.

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

use shelfscan_common::ScanState;

#[component]
pub fn UploadForm<FF, FU>(
    state: ReadSignal<ScanState>,
    on_file_selected: FF,
    on_upload: FU,
) -> impl IntoView
where
    FF: Fn(File) + 'static + Clone,
    FU: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_selected(file);
            }
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-form dragover"
                } else {
                    "upload-form"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input type="file" accept="image/*" on:change=on_change />

            {move || {
                state.get().selected_file.map(|name| {
                    view! { <p class="selected-file">{name}</p> }
                })
            }}

            <button
                class="btn btn-primary"
                disabled=move || !state.get().can_upload()
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                {move || {
                    if state.get().uploading {
                        "Uploading..."
                    } else {
                        "Upload Image"
                    }
                }}
            </button>
        </div>
    }
}
