use leptos::prelude::*;

/// Full-page spinner shown until the startup session check settles.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner" aria-hidden="true"></div>
            <p>"Loading..."</p>
        </div>
    }
}
