use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <div class="card card--center">
                <h1>"404"</h1>
                <p class="muted">"This page doesn't exist."</p>
                <A href="/" attr:class="btn btn--primary">"Go to Homepage"</A>
            </div>
        </div>
    }
}
