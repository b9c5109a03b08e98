use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn names() -> Vec<String> {
    vec!["logs-1".to_string(), "logs-2".to_string()]
}

#[test]
fn help_closes_on_any_key() {
    let mut modal = Modal::help();
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Char('x'))),
        ModalAction::Close
    );
}

#[test]
fn delete_confirm_fires_only_on_y() {
    let mut modal = Modal::confirm_delete(names());
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Char('z'))),
        ModalAction::None
    );
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Char('y'))),
        ModalAction::Delete { names: names() }
    );
}

#[test]
fn delete_confirm_cancels_on_n_or_esc() {
    let mut modal = Modal::confirm_delete(names());
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Char('n'))),
        ModalAction::Close
    );
    let mut modal = Modal::confirm_delete(names());
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Esc)),
        ModalAction::Close
    );
}

#[test]
fn optimize_prompt_defaults_to_one_segment() {
    let mut modal = Modal::optimize_prompt(names());
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Optimize {
            names: names(),
            max_segments: 1,
        }
    );
}

#[test]
fn number_prompt_accepts_digits_and_ignores_letters() {
    let mut modal = Modal::optimize_prompt(names());
    handle_modal_key(&mut modal, key(KeyCode::Char('a')));
    handle_modal_key(&mut modal, key(KeyCode::Char('3')));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Optimize {
            names: names(),
            max_segments: 13,
        }
    );
}

#[test]
fn empty_number_prompt_sets_a_notice_instead_of_firing() {
    let mut modal = Modal::replicas_prompt(names(), Some(2));
    handle_modal_key(&mut modal, key(KeyCode::Backspace));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::None
    );
    assert!(modal.notice.is_some());
}

#[test]
fn replicas_prompt_prefills_the_current_count() {
    let mut modal = Modal::replicas_prompt(names(), Some(2));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Replicas {
            names: names(),
            count: 2,
        }
    );

    let mut modal = Modal::replicas_prompt(names(), None);
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Replicas {
            names: names(),
            count: 0,
        }
    );
}

#[test]
fn create_modal_submits_the_edited_fields() {
    let mut modal = Modal::create_index(
        "2015-10-10t00:00:00.000z",
        "2015-10-10t00:00:00.001z",
        Some(5),
        Some(1),
    );
    // shards field: 5 -> 52
    handle_modal_key(&mut modal, key(KeyCode::Down));
    handle_modal_key(&mut modal, key(KeyCode::Char('2')));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Create {
            name: "2015-10-10t00:00:00.001z".to_string(),
            shards: 52,
            replicas: 1,
        }
    );
}

#[test]
fn create_modal_rejects_an_empty_name() {
    let mut modal = Modal::create_index("a.000z", "a.001z", None, None);
    for _ in 0.."a.001z".len() {
        handle_modal_key(&mut modal, key(KeyCode::Backspace));
    }
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::None
    );
    assert!(modal.notice.is_some());
}

#[test]
fn create_modal_field_focus_wraps_both_ways() {
    let mut modal = Modal::create_index("a.000z", "a.001z", None, None);
    // up from the name field wraps to replicas: typing lands there
    handle_modal_key(&mut modal, key(KeyCode::Up));
    handle_modal_key(&mut modal, key(KeyCode::Char('7')));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Create {
            name: "a.001z".to_string(),
            shards: 5,
            replicas: 7,
        }
    );
}

#[test]
fn name_cursor_steps_whole_chars_in_non_ascii_names() {
    let mut modal = Modal::create_index("журнал.000z", "журнал.001z", None, None);
    for _ in 0..6 {
        handle_modal_key(&mut modal, key(KeyCode::Left));
    }
    handle_modal_key(&mut modal, key(KeyCode::Char('5')));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Create {
            name: "журна5л.001z".to_string(),
            shards: 5,
            replicas: 0,
        }
    );
}

#[test]
fn backspace_removes_a_whole_non_ascii_char() {
    let mut modal = Modal::create_index("журнал.000z", "журнал.001z", None, None);
    for _ in 0..5 {
        handle_modal_key(&mut modal, key(KeyCode::Left));
    }
    handle_modal_key(&mut modal, key(KeyCode::Backspace));
    assert_eq!(
        handle_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Create {
            name: "журна.001z".to_string(),
            shards: 5,
            replicas: 0,
        }
    );
}

#[test]
fn cursor_column_counts_chars_not_bytes() {
    let mut input = Input::with_text("жж");
    assert_eq!(input.col(), 2);
    input.move_left();
    assert_eq!(input.col(), 1);
    input.move_right();
    assert_eq!(input.col(), 2);
}
