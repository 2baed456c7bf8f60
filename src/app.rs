//! Root application component and shared context wiring.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the identity and API clients from build-time config, provides
//! the auth, UI and toast signals as context, and runs the startup session
//! check. Nothing under the router renders until that check settles, so a
//! protected route never flashes for a visitor who is about to be redirected.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modal::AuthModal;
use crate::components::guarded::Guarded;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navigation::Navigation;
use crate::components::profile_modal::ProfileModal;
use crate::components::toaster::Toaster;
use crate::config::{AppConfig, ConfigError};
use crate::identity::IdentityClient;
use crate::net::api::ApiClient;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::campaign_detail::CampaignDetailPage;
use crate::pages::create_campaign::CreateCampaignPage;
use crate::pages::discover::DiscoverPage;
use crate::pages::home::HomePage;
use crate::pages::my_campaigns::MyCampaignsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::user_dashboard::UserDashboardPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::state::auth::{AuthContext, check_auth, install_session_listener};
use crate::state::toast::Toasts;
use crate::state::ui::UiState;
use crate::util::route_guard::AppRoute;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match AppConfig::from_build_env() {
        Ok(config) => view! { <ConfiguredApp config=config /> }.into_any(),
        Err(e) => {
            leptos::logging::error!("configuration error: {e}");
            view! { <ConfigErrorScreen error=e /> }.into_any()
        }
    }
}

#[component]
fn ConfiguredApp(config: AppConfig) -> impl IntoView {
    let identity = IdentityClient::new(&config);
    let api = ApiClient::new(&config, identity.clone());
    let ctx = AuthContext::new(identity, api);
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(Toasts::default());

    provide_context(ctx.clone());
    provide_context(ui);
    provide_context(toasts);

    let subscription = install_session_listener(&ctx);
    on_cleanup(move || subscription.unsubscribe());

    let startup = ctx.clone();
    leptos::task::spawn_local(async move {
        if let Err(e) = startup.identity.detect_session_in_url().await {
            leptos::logging::warn!("session link rejected: {e}");
        }
        check_auth(&startup).await;
        startup.identity.start_auto_refresh();
    });

    let auth = ctx.state;

    view! {
        <Title text="FundAI" />
        <Router>
            <Show when=move || !auth.get().loading fallback=|| view! { <LoadingScreen /> }>
                <Navigation />
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=StaticSegment("discover") view=DiscoverPage />
                        <Route path=(StaticSegment("campaign"), ParamSegment("id")) view=CampaignDetailPage />
                        <Route path=StaticSegment("reset-password") view=ResetPasswordPage />
                        <Route path=StaticSegment("verify-email") view=VerifyEmailPage />
                        <Route
                            path=StaticSegment("create-campaign")
                            view=|| {
                                view! {
                                    <Guarded access=AppRoute::CreateCampaign.access()>
                                        <CreateCampaignPage />
                                    </Guarded>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("my-campaigns")
                            view=|| {
                                view! {
                                    <Guarded access=AppRoute::MyCampaigns.access()>
                                        <MyCampaignsPage />
                                    </Guarded>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("user-dashboard")
                            view=|| {
                                view! {
                                    <Guarded access=AppRoute::UserDashboard.access()>
                                        <UserDashboardPage />
                                    </Guarded>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("analytics")
                            view=|| {
                                view! {
                                    <Guarded access=AppRoute::Analytics.access()>
                                        <AnalyticsPage />
                                    </Guarded>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| {
                                view! {
                                    <Guarded access=AppRoute::Admin.access()>
                                        <AdminDashboardPage />
                                    </Guarded>
                                }
                            }
                        />
                    </Routes>
                </main>
                <Show when=move || ui.get().show_auth_modal>
                    <AuthModal />
                </Show>
                <Show when=move || ui.get().show_profile_modal && auth.get().is_authenticated()>
                    <ProfileModal />
                </Show>
            </Show>
            <Toaster />
        </Router>
    }
}

#[component]
fn ConfigErrorScreen(error: ConfigError) -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <div class="card card--center">
                <h1>"FundAI is not configured"</h1>
                <p class="muted">{error.to_string()}</p>
            </div>
        </div>
    }
}
