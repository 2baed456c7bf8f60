//! Admin dashboard: platform stats, every campaign, every user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through the admin route guard. The three admin endpoints
//! are fetched concurrently and land together, so the page never shows
//! stats from one load next to rows from another.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{AdminStats, AdminUser, Campaign};
use crate::state::auth::AuthContext;
use crate::state::fetch::{Loadable, run_fetch};
use crate::state::toast::{ToastKind, Toasts, notify};
use crate::util::browser::confirm;
use crate::util::metrics::{format_amount, format_percentage, funded_percentage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminData {
    pub campaigns: Vec<Campaign>,
    pub users: Vec<AdminUser>,
    pub stats: AdminStats,
}

impl AdminData {
    /// Drop a deleted campaign and keep the headline count in step.
    pub fn remove_campaign(&mut self, id: &str) {
        let before = self.campaigns.len();
        self.campaigns.retain(|c| c.id != id);
        if self.campaigns.len() < before {
            self.stats.total_campaigns = (self.stats.total_campaigns - 1).max(0);
        }
    }
}

async fn load_admin_data(api: &ApiClient) -> Result<AdminData, ApiError> {
    let (campaigns, users, stats) = futures::join!(api.admin_campaigns(), api.admin_users(), api.admin_stats());
    Ok(AdminData { campaigns: campaigns?, users: users?, stats: stats? })
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = expect_context::<AuthContext>();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();
    let data = RwSignal::new(Loadable::<AdminData>::default());
    let view_id = RwSignal::new(None::<String>);

    let api = ctx.api.clone();
    leptos::task::spawn_local(async move {
        run_fetch(data, toasts, "Failed to load admin data", load_admin_data(&api)).await;
    });

    Effect::new(move || {
        if let Some(id) = view_id.get() {
            navigate(&format!("/campaign/{id}"), NavigateOptions::default());
        }
    });

    let api = ctx.api.clone();
    let on_delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this campaign?") {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_campaign(&id).await {
                Ok(()) => {
                    data.try_update(|l| l.modify(|d| d.remove_campaign(&id)));
                    notify(toasts, ToastKind::Success, "Campaign deleted successfully");
                }
                Err(e) => {
                    leptos::logging::warn!("admin delete {id}: {e}");
                    notify(toasts, ToastKind::Error, "Could not delete campaign");
                }
            }
        });
    });
    let on_view = Callback::new(move |id: String| view_id.set(Some(id)));

    let stats = move || data.get().data_or_default().stats;

    view! {
        <div class="page page--admin">
            <header class="page__header">
                <h1>"Admin Dashboard"</h1>
                <p class="muted">"Manage campaigns and users"</p>
            </header>

            <Show
                when=move || !data.get().is_pending()
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <div class="stat-grid">
                    <StatCard label="Total Campaigns" value=Signal::derive(move || stats().total_campaigns.to_string()) />
                    <StatCard label="Active Campaigns" value=Signal::derive(move || stats().active_campaigns.to_string()) />
                    <StatCard label="Total Users" value=Signal::derive(move || stats().total_users.to_string()) />
                    <StatCard label="Total Raised" value=Signal::derive(move || format_amount(stats().total_raised)) />
                </div>

                <section class="admin__section">
                    <h2>"Campaigns"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Creator"</th>
                                <th>"Raised"</th>
                                <th>"Funded"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                data.get()
                                    .data_or_default()
                                    .campaigns
                                    .into_iter()
                                    .map(|c| view! { <CampaignRow campaign=c on_view=on_view on_delete=on_delete /> })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </section>

                <section class="admin__section">
                    <h2>"Users"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Joined"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || data.get().data_or_default().users.into_iter().map(user_row).collect_view()}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

#[component]
fn CampaignRow(campaign: Campaign, on_view: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let view_target = campaign.id.clone();
    let delete_target = campaign.id.clone();
    let funded = format_percentage(funded_percentage(campaign.raised_amount, campaign.goal_amount));
    view! {
        <tr>
            <td>{campaign.title}</td>
            <td>{campaign.creator_name.unwrap_or_else(|| "—".to_owned())}</td>
            <td>{format_amount(campaign.raised_amount)}</td>
            <td>{funded}"%"</td>
            <td>
                <span class="badge">{campaign.status}</span>
            </td>
            <td class="table__actions">
                <button class="btn btn--ghost" on:click=move |_| on_view.run(view_target.clone())>"View"</button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_target.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn user_row(user: AdminUser) -> impl IntoView {
    let initial = user.initial();
    let role = user.role_label();
    let role_class = if user.is_admin { "badge badge--admin" } else { "badge" };
    let avatar = match user.picture.filter(|p| !p.is_empty()) {
        Some(src) => view! { <img class="avatar" src=src alt="" /> }.into_any(),
        None => view! { <span class="avatar avatar--empty">{initial}</span> }.into_any(),
    };
    view! {
        <tr>
            <td>{avatar}</td>
            <td>{user.name.unwrap_or_else(|| "—".to_owned())}</td>
            <td>{user.email}</td>
            <td>
                <span class=role_class>{role}</span>
            </td>
            <td>{user.created_at.unwrap_or_default()}</td>
        </tr>
    }
}
