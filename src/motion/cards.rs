//! Expand/collapse bookkeeping for a card collection.
//!
//! At most one card is expanded at any time; expanding a card collapses
//! whichever card held the slot before. The board only tracks state. The
//! caller decides what entering the expanded state triggers (the services
//! page populates and shows the detail modal).

/// Result of a toggle click on one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The card is now expanded; `collapsed` names the card that lost the
    /// slot, if any.
    Expanded { collapsed: Option<usize> },
    /// The card was expanded and is now resting.
    Collapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardBoard {
    expanded: Option<usize>,
}

impl CardBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) -> ToggleOutcome {
        if self.expanded == Some(index) {
            self.expanded = None;
            ToggleOutcome::Collapsed
        } else {
            let collapsed = self.expanded.replace(index);
            ToggleOutcome::Expanded { collapsed }
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_then_collapsing_round_trips() {
        let mut board = CardBoard::new();
        assert_eq!(board.toggle(2), ToggleOutcome::Expanded { collapsed: None });
        assert!(board.is_expanded(2));
        assert_eq!(board.toggle(2), ToggleOutcome::Collapsed);
        assert!(!board.is_expanded(2));
    }

    #[test]
    fn expanding_another_card_steals_the_slot() {
        let mut board = CardBoard::new();
        board.toggle(0);
        assert_eq!(board.toggle(3), ToggleOutcome::Expanded { collapsed: Some(0) });
        assert!(!board.is_expanded(0));
        assert!(board.is_expanded(3));
    }

    #[test]
    fn at_most_one_card_expanded_after_any_click_sequence() {
        let mut board = CardBoard::new();
        for index in [0, 1, 1, 2, 0, 0, 3, 2, 2] {
            board.toggle(index);
            let expanded_count = (0..4).filter(|&i| board.is_expanded(i)).count();
            assert!(expanded_count <= 1);
        }
    }
}
