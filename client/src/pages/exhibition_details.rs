//! Exhibition details: one upload, with manager rating and comment.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::PortalClient;
use crate::components::banner::{BannerView, Flash};
use crate::config::ClientConfig;
use crate::net::types::ExhibitionItem;
use crate::state::exhibition::{parse_comment, parse_rating, resolve_file_url, uploader_name};
use crate::util::liveness::Liveness;

const EXHIBITION_PATH: &str = "/exhibition";

#[component]
pub fn ExhibitionDetailsPage() -> impl IntoView {
    let client = expect_context::<PortalClient>();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let is_manager = client.session().is_manager();
    let params = use_params_map();
    let upload_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let item = RwSignal::new(None::<ExhibitionItem>);
    let rating = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let flash = Flash::new();
    let alive = Liveness::install();

    #[cfg(feature = "hydrate")]
    {
        let app = expect_context::<crate::app::AppSignals>();
        let client = client.clone();
        let alive = alive.clone();
        let id = upload_id();
        leptos::task::spawn_local(async move {
            let result = client.upload(&id).await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(upload) => {
                    rating.set(upload.rating.map(|r| format!("{r:.0}")).unwrap_or_default());
                    comment.set(upload.comment.clone().unwrap_or_default());
                    item.set(Some(upload));
                }
                Err(err) if err.is_not_found() => {
                    flash.error("Project not found.");
                    app.redirect_to(EXHIBITION_PATH);
                }
                Err(err) => flash.error(format!("Failed to load project details: {err}")),
            }
        });
    }

    let on_rate = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = match parse_rating(&rating.get_untracked()) {
                Ok(value) => value,
                Err(message) => {
                    flash.error(message);
                    return;
                }
            };
            let id = upload_id();
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.rate_upload(&id, value).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        item.update(|i| {
                            if let Some(i) = i {
                                i.rating = Some(f64::from(value));
                            }
                        });
                        flash.success("Rating submitted successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to submit rating: {err}")),
                }
            });
        }
    };

    let on_comment = {
        let client = client.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let text = match parse_comment(&comment.get_untracked()) {
                Ok(text) => text,
                Err(message) => {
                    flash.error(message);
                    return;
                }
            };
            let id = upload_id();
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.comment_upload(&id, &text).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        item.update(|i| {
                            if let Some(i) = i {
                                i.comment = Some(text);
                            }
                        });
                        flash.success("Comment submitted successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to submit comment: {err}")),
                }
            });
        }
    };

    let details = move || {
        item.get().map(|upload| {
            let uploader = uploader_name(&upload);
            let file = resolve_file_url(&upload.file_url, &config.api_base);
            view! {
                <h1>{upload.title}</h1>
                <p class="details__uploader">"Uploaded by " {uploader}</p>
                <p>{upload.description}</p>
                <dl class="details__facts">
                    <dt>"Project duration"</dt>
                    <dd>{upload.project_duration}</dd>
                    <dt>"Started"</dt>
                    <dd>{upload.started_date.unwrap_or_default()}</dd>
                    <dt>"Ended"</dt>
                    <dd>{upload.end_date.unwrap_or_default()}</dd>
                    <dt>"Rating"</dt>
                    <dd>{upload.rating.map_or_else(|| "Not rated yet".to_owned(), |r| format!("{r:.1}"))}</dd>
                    <dt>"Manager comment"</dt>
                    <dd>{upload.comment.unwrap_or_else(|| "No comment yet".to_owned())}</dd>
                </dl>
                {match file {
                    Some(url) => {
                        view! {
                            <a class="btn" href=url target="_blank" rel="noopener noreferrer">
                                "Open File"
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <p>"No file attached."</p> }.into_any(),
                }}
            }
        })
    };

    view! {
        <div class="details">
            <A href=EXHIBITION_PATH attr:class="details__back">
                "Back to Exhibition"
            </A>
            <BannerView flash=flash/>
            <Show when=move || item.with(Option::is_some) fallback=|| view! { <p>"Loading..."</p> }>
                {details.clone()}
            </Show>
            <Show when=move || is_manager && item.with(Option::is_some)>
                <section class="details__review">
                    <form on:submit=on_rate.clone()>
                        <label class="form-field">
                            <span class="form-field__label">"Rating (1-5)"</span>
                            <input
                                class="form-field__input"
                                type="number"
                                min="1"
                                max="5"
                                prop:value=move || rating.get()
                                on:input=move |ev| rating.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn--primary">
                            "Submit Rating"
                        </button>
                    </form>
                    <form on:submit=on_comment.clone()>
                        <label class="form-field">
                            <span class="form-field__label">"Comment"</span>
                            <textarea
                                class="form-field__input"
                                prop:value=move || comment.get()
                                on:input=move |ev| comment.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn--primary">
                            "Submit Comment"
                        </button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
