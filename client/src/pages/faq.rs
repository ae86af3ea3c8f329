//! FAQ board: questions with threaded answers.
//!
//! Authors and managers can edit or delete a post. Card validation messages
//! ("... cannot be empty.") stay on the board until the next action; server
//! failures go to the banner.

use leptos::prelude::*;

use crate::app::PortalClient;
use crate::components::banner::{BannerView, Flash};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Answer, Question};
use crate::state::faq::{FaqState, QuestionDraft, answer_content, can_modify};
use crate::util::liveness::Liveness;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeleteTarget {
    Question(i64),
    Answer(i64),
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let client = expect_context::<PortalClient>();
    let session = client.session().session();
    let viewer = session.employee_id;
    let is_manager = session.is_manager();

    let state = RwSignal::new(FaqState::default());
    let flash = Flash::new();
    let alive = Liveness::install();
    let pending_delete = RwSignal::new(None::<DeleteTarget>);

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = client.questions().await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(questions) => state.update(|s| s.questions = questions),
                Err(err) => flash.error(format!("Failed to load questions: {err}")),
            }
        });
    }

    let post_question = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let request = match state.with_untracked(|s| s.new_question.to_request("Question")) {
                Ok(request) => request,
                Err(message) => {
                    state.update(|s| s.card_error = Some(message));
                    return;
                }
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.post_question(&request).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(question) => {
                        state.update(|s| s.question_posted(question));
                        flash.success("Question posted successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to post question: {err}")),
                }
            });
        })
    };

    let save_question = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let Some((id, draft)) = state.with_untracked(|s| s.editing_question.clone()) else {
                return;
            };
            let request = match draft.to_request("Edited question") {
                Ok(request) => request,
                Err(message) => {
                    state.update(|s| s.card_error = Some(message));
                    return;
                }
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.update_question(id, &request).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(question) => {
                        state.update(|s| s.question_updated(question));
                        flash.success("Question updated successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to update question: {err}")),
                }
            });
        })
    };

    let post_answer = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |question_id: i64| {
            let raw = state.with_untracked(|s| s.answer_drafts.get(&question_id).cloned().unwrap_or_default());
            let content = match answer_content(&raw, "Answer") {
                Ok(content) => content,
                Err(message) => {
                    state.update(|s| s.card_error = Some(message));
                    return;
                }
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.post_answer(question_id, &content).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(answer) => {
                        state.update(|s| s.answer_posted(answer));
                        flash.success("Answer posted successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to post answer: {err}")),
                }
            });
        })
    };

    let save_answer = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let Some((id, raw)) = state.with_untracked(|s| s.editing_answer.clone()) else {
                return;
            };
            let content = match answer_content(&raw, "Edited answer") {
                Ok(content) => content,
                Err(message) => {
                    state.update(|s| s.card_error = Some(message));
                    return;
                }
            };
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = client.update_answer(id, &content).await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(answer) => {
                        state.update(|s| s.answer_updated(answer));
                        flash.success("Answer updated successfully!");
                    }
                    Err(err) => flash.error(format!("Failed to update answer: {err}")),
                }
            });
        })
    };

    let confirm_delete = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            let Some(target) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = match target {
                    DeleteTarget::Question(id) => client.delete_question(id).await,
                    DeleteTarget::Answer(id) => client.delete_answer(id).await,
                };
                if !alive.is_alive() {
                    return;
                }
                match (target, result) {
                    (DeleteTarget::Question(id), Ok(())) => {
                        state.update(|s| s.question_deleted(id));
                        flash.success("Question deleted successfully!");
                    }
                    (DeleteTarget::Answer(id), Ok(())) => {
                        state.update(|s| s.answer_deleted(id));
                        flash.success("Answer deleted successfully!");
                    }
                    (_, Err(err)) => flash.error(format!("Failed to delete: {err}")),
                }
            });
        })
    };

    let actions = CardActions { viewer, is_manager, state, pending_delete, save_question, post_answer, save_answer };

    view! {
        <div class="faq">
            <h1>"Frequently Asked Questions"</h1>
            <BannerView flash=flash/>
            <Show when=move || state.with(|s| s.card_error.is_some())>
                <p class="faq__card-error">{move || state.with(|s| s.card_error.clone().unwrap_or_default())}</p>
            </Show>

            <form class="faq__ask" on:submit=move |ev| post_question.run(ev)>
                <h2>"Ask a Question"</h2>
                <input
                    class="form-field__input"
                    placeholder="Question title"
                    prop:value=move || state.with(|s| s.new_question.title.clone())
                    on:input=move |ev| state.update(|s| s.new_question.title = event_target_value(&ev))
                />
                <textarea
                    class="form-field__input"
                    placeholder="Describe your question"
                    prop:value=move || state.with(|s| s.new_question.content.clone())
                    on:input=move |ev| state.update(|s| s.new_question.content = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn--primary">
                    "Post Question"
                </button>
            </form>

            <div class="faq__questions">
                {move || {
                    let questions = state.with(|s| s.questions.clone());
                    if questions.is_empty() {
                        return view! { <p>"No questions yet."</p> }.into_any();
                    }
                    questions
                        .into_iter()
                        .map(|question| view! { <QuestionCard question=question actions=actions/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message="Are you sure you want to delete this? This action cannot be undone."
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

/// Everything a card needs to act on the board.
#[derive(Clone, Copy)]
struct CardActions {
    viewer: Option<i64>,
    is_manager: bool,
    state: RwSignal<FaqState>,
    pending_delete: RwSignal<Option<DeleteTarget>>,
    save_question: Callback<()>,
    post_answer: Callback<i64>,
    save_answer: Callback<()>,
}

impl CardActions {
    fn can_modify(&self, author: Option<i64>) -> bool {
        can_modify(author, self.viewer, self.is_manager)
    }
}

#[component]
fn QuestionCard(question: Question, actions: CardActions) -> impl IntoView {
    let CardActions { state, pending_delete, save_question, post_answer, .. } = actions;
    let id = question.id;
    let editable = actions.can_modify(question.user_external_id);
    let editing = move || state.with(|s| s.editing_question.as_ref().is_some_and(|(e, _)| *e == id));
    let edit_source = question.clone();
    let answers = question.answers.clone();

    view! {
        <article class="faq-card">
            <Show
                when=editing
                fallback=move || {
                    let q = question.clone();
                    view! {
                        <h3>{q.title}</h3>
                        <p>{q.content}</p>
                        <p class="faq-card__meta">
                            {q.user_name} " (" {q.user_role} ") " {q.posted_at.unwrap_or_default()}
                        </p>
                    }
                }
            >
                <input
                    class="form-field__input"
                    prop:value=move || draft_field(state, |d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            if let Some((_, draft)) = s.editing_question.as_mut() {
                                draft.title = value;
                            }
                        });
                    }
                />
                <textarea
                    class="form-field__input"
                    prop:value=move || draft_field(state, |d| d.content.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            if let Some((_, draft)) = s.editing_question.as_mut() {
                                draft.content = value;
                            }
                        });
                    }
                ></textarea>
                <button class="btn btn--primary" on:click=move |_| save_question.run(())>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| state.update(FaqState::cancel_edits)>
                    "Cancel"
                </button>
            </Show>

            <Show when=move || editable && !editing()>
                <div class="faq-card__actions">
                    <button
                        class="btn"
                        on:click={
                            let source = edit_source.clone();
                            move |_| state.update(|s| s.start_edit_question(&source))
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| pending_delete.set(Some(DeleteTarget::Question(id)))
                    >
                        "Delete"
                    </button>
                </div>
            </Show>

            <ul class="faq-card__answers">
                {answers.into_iter().map(|answer| view! { <AnswerItem answer=answer actions=actions/> }).collect::<Vec<_>>()}
            </ul>

            <div class="faq-card__reply">
                <textarea
                    class="form-field__input"
                    placeholder="Write an answer"
                    prop:value=move || state.with(|s| s.answer_drafts.get(&id).cloned().unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.answer_drafts.insert(id, value);
                        });
                    }
                ></textarea>
                <button class="btn" on:click=move |_| post_answer.run(id)>
                    "Post Answer"
                </button>
            </div>
        </article>
    }
}

fn draft_field(state: RwSignal<FaqState>, get: fn(&QuestionDraft) -> String) -> String {
    state.with(|s| s.editing_question.as_ref().map(|(_, d)| get(d)).unwrap_or_default())
}

#[component]
fn AnswerItem(answer: Answer, actions: CardActions) -> impl IntoView {
    let CardActions { state, pending_delete, save_answer, .. } = actions;
    let id = answer.id;
    let editable = actions.can_modify(answer.user_external_id);
    let editing = move || state.with(|s| s.editing_answer.as_ref().is_some_and(|(e, _)| *e == id));
    let edit_source = answer.clone();

    view! {
        <li class="faq-answer">
            <Show
                when=editing
                fallback=move || {
                    let a = answer.clone();
                    view! {
                        <p>{a.content}</p>
                        <p class="faq-answer__meta">
                            {a.user_name} " (" {a.user_role} ") " {a.posted_at.unwrap_or_default()}
                        </p>
                    }
                }
            >
                <textarea
                    class="form-field__input"
                    prop:value=move || {
                        state.with(|s| s.editing_answer.as_ref().map(|(_, c)| c.clone()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            if let Some((_, content)) = s.editing_answer.as_mut() {
                                *content = value;
                            }
                        });
                    }
                ></textarea>
                <button class="btn btn--primary" on:click=move |_| save_answer.run(())>
                    "Save"
                </button>
                <button class="btn" on:click=move |_| state.update(FaqState::cancel_edits)>
                    "Cancel"
                </button>
            </Show>
            <Show when=move || editable && !editing()>
                <button
                    class="btn"
                    on:click={
                        let source = edit_source.clone();
                        move |_| state.update(|s| s.start_edit_answer(&source))
                    }
                >
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(DeleteTarget::Answer(id)))>
                    "Delete"
                </button>
            </Show>
        </li>
    }
}
