//! Page orchestration
//!
//! One `ScanState` signal drives both views. Event handlers dispatch
//! actions into the state machine and run the async API calls; the
//! camera controller and the chosen `File` handle live outside the
//! reactive state value.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::dialogs;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, MediaStream};

use shelfscan_common::{Action, Error, ScanState, View};

use crate::api::{recommend, upload};
use crate::camera::CameraController;
use crate::components::{
    capture_panel::CapturePanel, header::Header, recommendations::Recommendations,
    upload_form::UploadForm,
};

fn attach_stream(video_ref: NodeRef<Video>, stream: &MediaStream) {
    if let Some(video) = video_ref.get_untracked() {
        video.set_src_object(Some(stream));
        let _ = video.play();
    }
}

fn detach_stream(video_ref: NodeRef<Video>) {
    if let Some(video) = video_ref.get_untracked() {
        video.set_src_object(None);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(ScanState::default());
    let dispatch = move |action: Action| set_state.update(|s| s.apply(action));

    let camera = CameraController::new();
    let file_store: Rc<RefCell<Option<File>>> = Rc::new(RefCell::new(None));
    let video_ref = NodeRef::<Video>::new();

    let start_camera = {
        let camera = camera.clone();
        move |facing| {
            let camera = camera.clone();
            dispatch(Action::CameraPending);
            spawn_local(async move {
                match camera.start(facing).await {
                    Ok(stream) => {
                        attach_stream(video_ref, &stream);
                        dispatch(Action::CameraStarted(facing));
                    }
                    Err(e) => {
                        console::error!(format!("camera error: {}", e));
                        dispatch(Action::CameraFailed(e.to_string()));
                    }
                }
            });
        }
    };

    let on_start = {
        let start_camera = start_camera.clone();
        move |_: ()| {
            start_camera(state.get_untracked().facing);
        }
    };

    let on_toggle = {
        let camera = camera.clone();
        move |_: ()| {
            let camera = camera.clone();
            dispatch(Action::CameraPending);
            spawn_local(async move {
                match camera.toggle().await {
                    Ok(stream) => {
                        attach_stream(video_ref, &stream);
                        dispatch(Action::CameraStarted(camera.facing()));
                    }
                    Err(e) => {
                        console::error!(format!("camera error: {}", e));
                        detach_stream(video_ref);
                        dispatch(Action::CameraFailed(e.to_string()));
                    }
                }
            });
        }
    };

    let on_capture = {
        let camera = camera.clone();
        move |_: ()| {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            match camera.capture_frame(&video) {
                Ok(image) => {
                    camera.stop();
                    detach_stream(video_ref);
                    dispatch(Action::FrameCaptured(image));
                }
                Err(e) => {
                    console::error!(format!("capture error: {}", e));
                    dispatch(Action::CameraFailed(e.to_string()));
                }
            }
        }
    };

    let on_retake = {
        let start_camera = start_camera.clone();
        move |_: ()| {
            dispatch(Action::Retake);
            start_camera(state.get_untracked().facing);
        }
    };

    let on_file_selected = {
        let file_store = file_store.clone();
        move |file: File| {
            let name = file.name();
            *file_store.borrow_mut() = Some(file);
            dispatch(Action::SelectFile(name));
        }
    };

    let on_upload = {
        let camera = camera.clone();
        let file_store = file_store.clone();
        move |_: ()| {
            if state.get_untracked().uploading {
                return;
            }

            let camera = camera.clone();
            let file = file_store.borrow().clone();
            let captured = state.get_untracked().captured;
            dispatch(Action::UploadStarted);

            spawn_local(async move {
                match upload::submit(file, captured).await {
                    Ok(response) => {
                        camera.stop();
                        detach_stream(video_ref);
                        dispatch(Action::UploadSucceeded(response.extracted_titles));
                    }
                    Err(Error::NoImageSource) => {
                        dispatch(Action::UploadFailed(Error::NoImageSource.to_string()));
                        dialogs::alert("Please select or capture an image first.");
                    }
                    Err(e) => {
                        console::error!(format!("upload error: {}", e));
                        dispatch(Action::UploadFailed(e.to_string()));
                    }
                }
            });
        }
    };

    let on_recommend = move |preference: String| {
        if state.get_untracked().recommending {
            return;
        }

        let titles = state.get_untracked().titles().to_vec();
        dispatch(Action::RecommendStarted);

        spawn_local(async move {
            match recommend::request(&titles, &preference).await {
                Ok(response) => {
                    dispatch(Action::RecommendSucceeded(response.recommendations));
                }
                Err(e) => {
                    console::error!(format!("recommendation error: {}", e));
                    dispatch(Action::RecommendFailed(e.to_string()));
                }
            }
        });
    };

    let on_reset = {
        let camera = camera.clone();
        let file_store = file_store.clone();
        move |_: ()| {
            camera.stop();
            detach_stream(video_ref);
            file_store.borrow_mut().take();
            dispatch(Action::Reset);
        }
    };

    view! {
        <div class="container">
            <Header />

            {move || {
                state.get().error.map(|message| {
                    view! { <p class="error-message">{message}</p> }
                })
            }}

            <div class="view" class:hidden=move || state.get().view() != View::Capture>
                <CapturePanel
                    state=state
                    video_ref=video_ref
                    on_start=on_start
                    on_toggle=on_toggle
                    on_capture=on_capture
                    on_retake=on_retake
                />
                <UploadForm state=state on_file_selected=on_file_selected on_upload=on_upload />
            </div>

            <div class="view" class:hidden=move || state.get().view() != View::Recommendations>
                <Recommendations state=state on_recommend=on_recommend on_reset=on_reset />
            </div>
        </div>
    }
}
