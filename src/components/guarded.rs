//! Route guard wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view. The access decision is recomputed on every auth
//! change; a denied visitor is sent to `/` with a history replace and none of
//! the protected view is rendered.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::route_guard::{RouteAccess, RouteDecision, decide};

#[component]
pub fn Guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>().state;
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        decide(access, state.user.as_ref())
    });

    Effect::new(move || {
        if let RouteDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || (decision.get() == RouteDecision::Render).then(|| children())
}
