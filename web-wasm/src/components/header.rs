//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Bookshelf Scanner 📚"</h1>
        </header>
    }
}
