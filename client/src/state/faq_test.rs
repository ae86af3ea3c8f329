use super::*;

fn question(id: i64) -> Question {
    Question { id, title: format!("Q{id}"), content: "body".to_owned(), ..Question::default() }
}

fn answer(id: i64, question_id: i64, content: &str) -> Answer {
    Answer { id, question_id, content: content.to_owned(), ..Answer::default() }
}

#[test]
fn empty_title_reports_card_message() {
    let draft = QuestionDraft { title: "  ".to_owned(), content: "x".to_owned() };
    assert_eq!(draft.to_request("Question").unwrap_err(), "Question title cannot be empty.");
}

#[test]
fn empty_edited_content_reports_card_message() {
    let draft = QuestionDraft { title: "T".to_owned(), content: String::new() };
    assert_eq!(draft.to_request("Edited question").unwrap_err(), "Edited question content cannot be empty.");
}

#[test]
fn answer_content_is_trimmed() {
    assert_eq!(answer_content("  yes ", "Answer").unwrap(), "yes");
    assert_eq!(answer_content(" ", "Answer").unwrap_err(), "Answer content cannot be empty.");
}

#[test]
fn posted_answer_attaches_to_question_and_clears_draft() {
    let mut state = FaqState { questions: vec![question(1)], ..FaqState::default() };
    state.answer_drafts.insert(1, "draft".to_owned());
    state.answer_posted(answer(10, 1, "yes"));
    assert_eq!(state.questions[0].answers.len(), 1);
    assert!(!state.answer_drafts.contains_key(&1));
}

#[test]
fn question_update_keeps_existing_answers_when_omitted() {
    let mut q = question(1);
    q.answers.push(answer(10, 1, "yes"));
    let mut state = FaqState { questions: vec![q], ..FaqState::default() };
    let first = state.questions[0].clone();
    state.start_edit_question(&first);

    state.question_updated(Question { title: "New".to_owned(), ..question(1) });

    assert_eq!(state.questions[0].title, "New");
    assert_eq!(state.questions[0].answers.len(), 1);
    assert!(state.editing_question.is_none());
}

#[test]
fn answer_update_and_delete() {
    let mut q = question(1);
    q.answers.push(answer(10, 1, "old"));
    let mut state = FaqState { questions: vec![q], ..FaqState::default() };

    state.answer_updated(answer(10, 1, "new"));
    assert_eq!(state.questions[0].answers[0].content, "new");

    state.answer_deleted(10);
    assert!(state.questions[0].answers.is_empty());
}

#[test]
fn modify_rights_for_owner_or_manager() {
    assert!(can_modify(Some(7), Some(7), false));
    assert!(can_modify(Some(7), Some(8), true));
    assert!(!can_modify(Some(7), Some(8), false));
    assert!(!can_modify(None, None, false));
}
