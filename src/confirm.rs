//! Row Confirmation State
//!
//! Per-row state for the archive/remove confirmation dialogs, kept apart from
//! the view so the transitions can be tested on their own.

/// Which confirmation (if any) a row is waiting on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    None,
    PendingRemove,
    PendingArchive,
}

/// User input that drives the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    ClickArchive,
    ClickRemove,
    Confirm,
    Cancel,
}

/// Callback to fire after a confirmed dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEffect {
    Remove,
    Archive,
}

/// Dialog wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub text: &'static str,
    pub button_text: &'static str,
}

pub const REMOVE_PROMPT: Prompt = Prompt {
    text: "Are you sure you want to remove this project?",
    button_text: "Remove project",
};

pub const ARCHIVE_PROMPT: Prompt = Prompt {
    text: "Do you want to archive this project?",
    button_text: "Archive project",
};

pub const UNARCHIVE_PROMPT: Prompt = Prompt {
    text: "Do you want to unarchive this project?",
    button_text: "Unarchive project",
};

impl ConfirmState {
    pub fn is_open(self) -> bool {
        self != ConfirmState::None
    }
}

/// Next state plus the callback (if any) the row must invoke
///
/// A new click always replaces whatever was pending, so a row never stacks
/// two dialogs.
pub fn transition(state: ConfirmState, event: ConfirmEvent) -> (ConfirmState, Option<ConfirmEffect>) {
    match (state, event) {
        (_, ConfirmEvent::ClickArchive) => (ConfirmState::PendingArchive, None),
        (_, ConfirmEvent::ClickRemove) => (ConfirmState::PendingRemove, None),
        (ConfirmState::PendingRemove, ConfirmEvent::Confirm) => (ConfirmState::None, Some(ConfirmEffect::Remove)),
        (ConfirmState::PendingArchive, ConfirmEvent::Confirm) => (ConfirmState::None, Some(ConfirmEffect::Archive)),
        (ConfirmState::None, ConfirmEvent::Confirm) => (ConfirmState::None, None),
        (_, ConfirmEvent::Cancel) => (ConfirmState::None, None),
    }
}

/// Wording for the open dialog; archive wording flips on the project's current state
pub fn prompt(state: ConfirmState, archived: bool) -> Option<Prompt> {
    match state {
        ConfirmState::None => None,
        ConfirmState::PendingRemove => Some(REMOVE_PROMPT),
        ConfirmState::PendingArchive if archived => Some(UNARCHIVE_PROMPT),
        ConfirmState::PendingArchive => Some(ARCHIVE_PROMPT),
    }
}

/// Label for the archive button and its tooltip
pub fn archive_label(archived: bool) -> &'static str {
    if archived { UNARCHIVE_PROMPT.button_text } else { ARCHIVE_PROMPT.button_text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[ConfirmEvent]) -> (ConfirmState, Vec<ConfirmEffect>) {
        let mut state = ConfirmState::default();
        let mut effects = Vec::new();
        for event in events {
            let (next, effect) = transition(state, *event);
            state = next;
            effects.extend(effect);
        }
        (state, effects)
    }

    #[test]
    fn test_archive_then_confirm() {
        let (state, effects) = run(&[ConfirmEvent::ClickArchive, ConfirmEvent::Confirm]);
        assert_eq!(state, ConfirmState::None);
        assert_eq!(effects, vec![ConfirmEffect::Archive]);
    }

    #[test]
    fn test_archive_then_cancel() {
        let (state, effects) = run(&[ConfirmEvent::ClickArchive, ConfirmEvent::Cancel]);
        assert_eq!(state, ConfirmState::None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_remove_then_confirm() {
        let (state, effects) = run(&[ConfirmEvent::ClickRemove, ConfirmEvent::Confirm]);
        assert_eq!(state, ConfirmState::None);
        assert_eq!(effects, vec![ConfirmEffect::Remove]);
    }

    #[test]
    fn test_archive_is_idempotent() {
        let (state, effects) = run(&[ConfirmEvent::ClickArchive, ConfirmEvent::ClickArchive]);
        assert_eq!(state, ConfirmState::PendingArchive);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_remove_replaces_pending_archive() {
        let (state, _) = run(&[ConfirmEvent::ClickArchive, ConfirmEvent::ClickRemove]);
        assert_eq!(state, ConfirmState::PendingRemove);
        assert_eq!(prompt(state, false).map(|p| p.text), Some("Are you sure you want to remove this project?"));

        // Confirming now removes, never archives
        let (_, effects) = run(&[ConfirmEvent::ClickArchive, ConfirmEvent::ClickRemove, ConfirmEvent::Confirm]);
        assert_eq!(effects, vec![ConfirmEffect::Remove]);
    }

    #[test]
    fn test_confirm_without_pending_does_nothing() {
        assert_eq!(transition(ConfirmState::None, ConfirmEvent::Confirm), (ConfirmState::None, None));
        assert_eq!(transition(ConfirmState::None, ConfirmEvent::Cancel), (ConfirmState::None, None));
    }

    #[test]
    fn test_prompt_wording() {
        assert_eq!(prompt(ConfirmState::None, false), None);
        assert_eq!(prompt(ConfirmState::PendingArchive, false), Some(ARCHIVE_PROMPT));
        assert_eq!(prompt(ConfirmState::PendingArchive, true), Some(UNARCHIVE_PROMPT));
        assert_eq!(prompt(ConfirmState::PendingRemove, true), Some(REMOVE_PROMPT));
        assert_eq!(archive_label(true), "Unarchive project");
        assert_eq!(archive_label(false), "Archive project");
    }

    #[test]
    fn test_is_open() {
        assert!(!ConfirmState::None.is_open());
        assert!(ConfirmState::PendingRemove.is_open());
        assert!(ConfirmState::PendingArchive.is_open());
    }
}
