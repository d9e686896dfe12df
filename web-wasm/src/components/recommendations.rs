//! Extracted titles and recommendations view
//!
//! Renders the titles the scan extracted, a free-text preference input,
//! and the recommended titles once fetched.

use leptos::prelude::*;

use shelfscan_common::ScanState;

#[component]
pub fn Recommendations<FR, FN>(
    state: ReadSignal<ScanState>,
    on_recommend: FR,
    on_reset: FN,
) -> impl IntoView
where
    FR: Fn(String) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    let (preference, set_preference) = signal(String::new());

    let titles = move || {
        state
            .get()
            .extracted_titles
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let recommendations = move || {
        state
            .get()
            .recommendations
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="recommendations">
            <h2>"Extracted Books:"</h2>
            <ul class="title-list">
                <For
                    each=titles
                    key=|(idx, _)| *idx
                    children=move |(_, title)| view! { <li>{title}</li> }
                />
            </ul>

            <div class="form-group">
                <label for="preference">"Reading preference (optional)"</label>
                <input
                    type="text"
                    id="preference"
                    placeholder="e.g. mystery, sci-fi..."
                    prop:value=move || preference.get()
                    on:input=move |ev| {
                        set_preference.set(event_target_value(&ev));
                    }
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || !state.get().can_recommend()
                on:click={
                    let on_recommend = on_recommend.clone();
                    move |_| on_recommend(preference.get_untracked())
                }
            >
                {move || {
                    if state.get().recommending {
                        "Fetching..."
                    } else {
                        "Get Recommendations"
                    }
                }}
            </button>

            <Show when=move || !state.get().recommendations.is_empty()>
                <h2>"Recommended Books:"</h2>
                <ul class="recommendation-list">
                    <For
                        each=recommendations
                        key=|(idx, _)| *idx
                        children=move |(_, title)| view! { <li>{title}</li> }
                    />
                </ul>
            </Show>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Scan another shelf"
            </button>
        </div>
    }
}
