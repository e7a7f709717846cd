//! Key event handlers for each view

use crate::estimator::{EstimatorView, FocusTarget};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{ActiveView, AppState, ViewKind};

/// Convert key events to messages based on the live view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }
    match &state.active {
        ActiveView::Analytics(_) => handle_key_analytics(key),
        ActiveView::Estimator(view) => handle_key_estimator(view, key),
    }
}

/// Keys that work in every view
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),
        InputKey::F(1) => Some(Message::SwitchView(ViewKind::Analytics)),
        InputKey::F(2) => Some(Message::SwitchView(ViewKind::Estimator)),
        _ => None,
    }
}

fn handle_key_analytics(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::ReloadView),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextView),
        _ => None,
    }
}

fn handle_key_estimator(view: &EstimatorView, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::CharCtrl('r') => return Some(Message::ReloadLocations),
        InputKey::CharCtrl('u') | InputKey::Delete => return Some(Message::FieldClear),
        _ => {}
    }

    match view.focus {
        FocusTarget::Area | FocusTarget::Bhk => handle_key_text_field(key),
        FocusTarget::Location => handle_key_location(key),
        FocusTarget::Submit => handle_key_submit(key),
    }
}

fn handle_key_text_field(key: InputKey) -> Option<Message> {
    match key {
        k if k.is_confirm() => Some(Message::ConfirmField),
        InputKey::Char(c) => Some(Message::FieldInput(c)),
        InputKey::Backspace => Some(Message::FieldBackspace),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrev),
        _ => None,
    }
}

fn handle_key_location(key: InputKey) -> Option<Message> {
    match key {
        k if k.is_confirm() => Some(Message::ConfirmField),
        InputKey::Down | InputKey::Right => Some(Message::SelectLocationNext),
        InputKey::Up | InputKey::Left => Some(Message::SelectLocationPrev),
        InputKey::Char(c) if c.is_alphabetic() => Some(Message::SelectLocationByInitial(c)),
        InputKey::Backspace => Some(Message::FieldClear),
        _ => None,
    }
}

/// The submit control: confirm or space activates it
fn handle_key_submit(key: InputKey) -> Option<Message> {
    match key {
        k if k.is_confirm() => Some(Message::SubmitEstimate),
        InputKey::Char(' ') => Some(Message::SubmitEstimate),
        InputKey::Up => Some(Message::FocusPrev),
        _ => None,
    }
}
