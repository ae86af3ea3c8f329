//! Exhibition gallery: every saved upload, filterable by uploader.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::PortalClient;
use crate::components::banner::{BannerView, Flash};
use crate::net::types::ExhibitionItem;
use crate::state::exhibition::{ExhibitionQuery, FilterKind, uploader_name};
use crate::util::liveness::Liveness;

#[component]
pub fn ExhibitionPage() -> impl IntoView {
    let client = expect_context::<PortalClient>();
    let items = RwSignal::new(Vec::<ExhibitionItem>::new());
    let query = RwSignal::new(ExhibitionQuery::default());
    let loading = RwSignal::new(true);
    let flash = Flash::new();
    let alive = Liveness::install();

    // Loads the list for the current query; an empty query lists everything.
    let load = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let filter = match query.with_untracked(ExhibitionQuery::to_filter) {
                Ok(filter) => filter,
                Err(message) => {
                    flash.error(message);
                    return;
                }
            };
            loading.set(true);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = match &filter {
                    Some(filter) => client.filtered_exhibition(filter).await,
                    None => client.exhibition().await,
                };
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(list) => items.set(list),
                    Err(err) => {
                        items.set(Vec::new());
                        flash.error(format!("Failed to load exhibition projects: {err}"));
                    }
                }
                loading.set(false);
            });
        })
    };

    #[cfg(feature = "hydrate")]
    load.run(());

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load.run(());
    };

    let on_clear = move |_| {
        query.set(ExhibitionQuery::default());
        flash.clear();
        load.run(());
    };

    let on_kind = move |ev: leptos::ev::Event| {
        let kind = match event_target_value(&ev).as_str() {
            "employeeId" => FilterKind::EmployeeId,
            "firstName" => FilterKind::FirstName,
            _ => FilterKind::None,
        };
        query.update(|q| q.kind = kind);
    };

    view! {
        <div class="exhibition">
            <h1>"Exhibition"</h1>
            <BannerView flash=flash/>
            <form class="exhibition__filter" on:submit=on_filter>
                <select class="form-field__input" on:change=on_kind>
                    <option value="" selected=move || query.with(|q| q.kind == FilterKind::None)>
                        "Filter by..."
                    </option>
                    <option value="employeeId" selected=move || query.with(|q| q.kind == FilterKind::EmployeeId)>
                        "Employee ID"
                    </option>
                    <option value="firstName" selected=move || query.with(|q| q.kind == FilterKind::FirstName)>
                        "First Name"
                    </option>
                </select>
                <input
                    class="form-field__input"
                    placeholder="Filter value"
                    prop:value=move || query.with(|q| q.value.clone())
                    on:input=move |ev| query.update(|q| q.value = event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Apply"
                </button>
                <button type="button" class="btn" on:click=on_clear>
                    "Clear"
                </button>
            </form>

            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="exhibition__grid">
                    {move || {
                        let list = items.get();
                        if list.is_empty() {
                            return view! { <p>"No projects found."</p> }.into_any();
                        }
                        list.into_iter()
                            .map(|item| view! { <ExhibitionCard item=item/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ExhibitionCard(item: ExhibitionItem) -> impl IntoView {
    let uploader = uploader_name(&item);
    let href = format!("/exhibition/{}", item.id);
    view! {
        <article class="exhibition-card">
            <h3>{item.title}</h3>
            <p class="exhibition-card__uploader">{uploader}</p>
            <p>{item.description}</p>
            <p class="exhibition-card__meta">{item.upload_date.unwrap_or_default()}</p>
            <A href=href attr:class="btn">
                "View Details"
            </A>
        </article>
    }
}
