//! Camera capture panel
//!
//! Live preview plus capture controls. The `<video>` element stays
//! mounted so a stream can attach before the first frame renders;
//! visibility follows the streaming flag. All controls are gated on the
//! camera-busy flag so start, flip, and stop serialize.

use leptos::html::Video;
use leptos::prelude::*;

use shelfscan_common::{FacingMode, ScanState};

#[component]
pub fn CapturePanel<FS, FT, FC, FR>(
    state: ReadSignal<ScanState>,
    video_ref: NodeRef<Video>,
    on_start: FS,
    on_toggle: FT,
    on_capture: FC,
    on_retake: FR,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    let streaming = move || state.get().streaming;
    let camera_busy = move || state.get().camera_busy;
    let has_capture = move || state.get().captured.is_some();

    view! {
        <div class="capture-panel">
            <video
                node_ref=video_ref
                class=move || {
                    if streaming() {
                        "camera-preview"
                    } else {
                        "camera-preview hidden"
                    }
                }
                autoplay=true
                muted=true
                playsinline=true
            />

            {move || {
                state.get().captured.map(|image| {
                    view! {
                        <img class="capture-preview" src=image.data_url alt="Captured bookshelf" />
                    }
                })
            }}

            <div class="capture-controls">
                <button
                    class="btn btn-primary"
                    class:hidden=move || streaming() || has_capture()
                    disabled=camera_busy
                    on:click={
                        let on_start = on_start.clone();
                        move |_| on_start(())
                    }
                >
                    "Start camera"
                </button>

                <button
                    class="btn btn-primary"
                    class:hidden=move || !streaming()
                    disabled=camera_busy
                    on:click={
                        let on_capture = on_capture.clone();
                        move |_| on_capture(())
                    }
                >
                    "Capture"
                </button>

                <button
                    class="btn btn-secondary"
                    class:hidden=move || !streaming()
                    disabled=camera_busy
                    on:click={
                        let on_toggle = on_toggle.clone();
                        move |_| on_toggle(())
                    }
                >
                    {move || match state.get().facing {
                        FacingMode::User => "Use back camera",
                        FacingMode::Environment => "Use front camera",
                    }}
                </button>

                <button
                    class="btn btn-secondary"
                    class:hidden=move || streaming() || !has_capture()
                    disabled=camera_busy
                    on:click={
                        let on_retake = on_retake.clone();
                        move |_| on_retake(())
                    }
                >
                    "Retake"
                </button>
            </div>
        </div>
    }
}
