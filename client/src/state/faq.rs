//! FAQ board state.
//!
//! Card-level validation messages ("... cannot be empty.") live in
//! `card_error` and stay until the user acts; server failures go to the
//! self-clearing banner instead.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::collections::HashMap;

use crate::net::types::{Answer, Question, QuestionRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub content: String,
}

impl QuestionDraft {
    /// Trimmed request, or the card message for the first empty field.
    ///
    /// # Errors
    ///
    /// Returns the message to show on the card. `prefix` distinguishes the
    /// new-question card from an edit ("Question" vs "Edited question").
    pub fn to_request(&self, prefix: &str) -> Result<QuestionRequest, String> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() {
            return Err(format!("{prefix} title cannot be empty."));
        }
        if content.is_empty() {
            return Err(format!("{prefix} content cannot be empty."));
        }
        Ok(QuestionRequest { title: title.to_owned(), content: content.to_owned() })
    }
}

/// Trimmed answer text, or the card message when it is empty.
///
/// # Errors
///
/// Returns `"{prefix} content cannot be empty."`.
pub fn answer_content(raw: &str, prefix: &str) -> Result<String, String> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(format!("{prefix} content cannot be empty."));
    }
    Ok(content.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub questions: Vec<Question>,
    pub new_question: QuestionDraft,
    /// Unsent answer text keyed by question id.
    pub answer_drafts: HashMap<i64, String>,
    pub editing_question: Option<(i64, QuestionDraft)>,
    pub editing_answer: Option<(i64, String)>,
    pub card_error: Option<String>,
}

impl FaqState {
    pub fn question_posted(&mut self, question: Question) {
        self.questions.insert(0, question);
        self.new_question = QuestionDraft::default();
        self.card_error = None;
    }

    pub fn start_edit_question(&mut self, question: &Question) {
        self.editing_question =
            Some((question.id, QuestionDraft { title: question.title.clone(), content: question.content.clone() }));
        self.card_error = None;
    }

    pub fn question_updated(&mut self, updated: Question) {
        if let Some(slot) = self.questions.iter_mut().find(|q| q.id == updated.id) {
            let answers = std::mem::take(&mut slot.answers);
            *slot = updated;
            if slot.answers.is_empty() {
                slot.answers = answers;
            }
        }
        self.editing_question = None;
        self.card_error = None;
    }

    pub fn question_deleted(&mut self, id: i64) {
        self.questions.retain(|q| q.id != id);
        if self.editing_question.as_ref().is_some_and(|(editing, _)| *editing == id) {
            self.editing_question = None;
        }
    }

    pub fn answer_posted(&mut self, answer: Answer) {
        self.answer_drafts.remove(&answer.question_id);
        if let Some(question) = self.questions.iter_mut().find(|q| q.id == answer.question_id) {
            question.answers.push(answer);
        }
        self.card_error = None;
    }

    pub fn start_edit_answer(&mut self, answer: &Answer) {
        self.editing_answer = Some((answer.id, answer.content.clone()));
        self.card_error = None;
    }

    pub fn answer_updated(&mut self, updated: Answer) {
        for question in &mut self.questions {
            if let Some(slot) = question.answers.iter_mut().find(|a| a.id == updated.id) {
                *slot = updated;
                break;
            }
        }
        self.editing_answer = None;
        self.card_error = None;
    }

    pub fn answer_deleted(&mut self, id: i64) {
        for question in &mut self.questions {
            question.answers.retain(|a| a.id != id);
        }
    }

    pub fn cancel_edits(&mut self) {
        self.editing_question = None;
        self.editing_answer = None;
        self.card_error = None;
    }
}

/// Edit/delete affordances are shown to the author and to managers.
pub fn can_modify(author: Option<i64>, viewer: Option<i64>, viewer_is_manager: bool) -> bool {
    viewer_is_manager || (viewer.is_some() && author == viewer)
}
