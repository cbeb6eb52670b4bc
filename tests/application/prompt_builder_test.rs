use lexiscan::application::services::{analysis_prompt, chat_prompt};

#[test]
fn given_document_text_when_building_analysis_prompt_then_text_appears_verbatim() {
    let text = "Clause 7(b): the Tenant shall indemnify the Landlord & \"assigns\".";

    let prompt = analysis_prompt(text);

    assert!(prompt.contains(text));
}

#[test]
fn given_analysis_prompt_then_it_names_the_three_required_keys() {
    let prompt = analysis_prompt("text");

    assert!(prompt.contains("\"summary\""));
    assert!(prompt.contains("\"risks_benefits\""));
    assert!(prompt.contains("\"key_clauses\""));
}

#[test]
fn given_analysis_prompt_then_it_states_the_minimum_cardinalities() {
    let prompt = analysis_prompt("text");

    assert!(prompt.contains("at least two risks and two benefits"));
    assert!(prompt.contains("at least three critical clauses"));
}

#[test]
fn given_analysis_prompt_then_it_frames_the_signing_party_perspective() {
    let prompt = analysis_prompt("text");

    assert!(prompt.contains("the party who is signing it"));
    assert!(prompt.contains("non-lawyer"));
}

#[test]
fn given_analysis_prompt_then_it_forbids_markdown_fencing() {
    let prompt = analysis_prompt("text");

    assert!(prompt.contains("markdown formatting"));
}

#[test]
fn given_chat_prompt_then_question_and_document_appear_verbatim() {
    let prompt = chat_prompt("The tenant pays rent.", "Who pays rent?");

    assert!(prompt.contains("The tenant pays rent."));
    assert!(prompt.contains("Who pays rent?"));
}

#[test]
fn given_chat_prompt_then_it_instructs_to_admit_missing_answers() {
    let prompt = chat_prompt("doc", "question");

    assert!(prompt.contains("does not contain that information"));
    assert!(prompt.contains("*only*"));
}
