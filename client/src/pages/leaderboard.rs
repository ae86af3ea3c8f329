//! Leaderboard: employees ranked by average upload rating.

use leptos::prelude::*;

use crate::app::PortalClient;
use crate::components::banner::{BannerView, Flash};
use crate::state::leaderboard::{RankedEntry, format_rating, rank};
use crate::util::liveness::Liveness;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let client = expect_context::<PortalClient>();
    let rows = RwSignal::new(Vec::<RankedEntry>::new());
    let loading = RwSignal::new(true);
    let flash = Flash::new();
    let alive = Liveness::install();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = client.leaderboard().await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(entries) => rows.set(rank(entries)),
            Err(err) => flash.error(format!("Failed to load leaderboard: {err}")),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (client, alive);

    view! {
        <div class="leaderboard">
            <h1>"Leaderboard"</h1>
            <BannerView flash=flash/>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <p>"No ratings yet."</p> }
                >
                    <table class="leaderboard__table">
                        <thead>
                            <tr>
                                <th>"Rank"</th>
                                <th>"Employee"</th>
                                <th>"Employee ID"</th>
                                <th>"Average Rating"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr class:leaderboard__top=row.rank <= 3>
                                                <td>{row.rank}</td>
                                                <td>{row.entry.full_name()}</td>
                                                <td>{row.entry.employee_id}</td>
                                                <td>{format_rating(row.entry.average_rating)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
