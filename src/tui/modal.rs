// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return
// actions. App just holds Option<Modal>, input routing acts on the
// returned ModalAction. While a modal is open it absorbs all input.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Country detail overlay - stores the master-list index of the
    /// record being viewed
    Detail(usize),
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute.
    ///
    /// Dismissal mirrors the three dismiss paths of the directory:
    /// explicit close (q / Enter), Esc, and F1 re-toggle for help.
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }

    /// Get the master-list index if this is a Detail modal
    pub fn detail_index(&self) -> Option<usize> {
        match self {
            Modal::Detail(idx) => Some(*idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_closes_on_dismiss_keys() {
        for key in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Enter] {
            let mut modal = Modal::Detail(3);
            assert!(matches!(modal.handle_input(key), ModalAction::Close));
        }
    }

    #[test]
    fn detail_absorbs_other_keys() {
        let mut modal = Modal::Detail(0);
        assert!(matches!(
            modal.handle_input(KeyCode::Char('x')),
            ModalAction::None
        ));
        assert_eq!(modal.detail_index(), Some(0));
    }

    #[test]
    fn help_toggles_off_with_f1() {
        let mut modal = Modal::Help;
        assert!(matches!(modal.handle_input(KeyCode::F(1)), ModalAction::Close));
        assert_eq!(Modal::Help.detail_index(), None);
    }
}
