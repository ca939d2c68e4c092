//! The closed set of things a philosopher can do, and which hand it does them with.

use serde::{Deserialize, Serialize};

/// One of the philosopher's two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn other(self) -> Self {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Every transition a philosopher records.
///
/// **Declaration order matters.** Events that share a timestamp are ordered by
/// this enum's discriminant (see [`Timeline`](crate::timeline::Timeline)), so
/// reordering variants changes how simultaneous events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    Thinking,
    EndThinking,
    TakingLeft,
    NotTakingLeft,
    TakingRight,
    NotTakingRight,
    TakingLeftHaveRight,
    TakingRightHaveLeft,
    NotTakingLeftHaveRight,
    NotTakingRightHaveLeft,
    Dining,
    EndDining,
    PutLeftHaveRight,
    PutLeft,
    PutRight,
    Starve,
    Finish,
}

impl Action {
    /// All variants in declaration order.
    pub const ALL: [Action; 17] = [
        Action::Thinking,
        Action::EndThinking,
        Action::TakingLeft,
        Action::NotTakingLeft,
        Action::TakingRight,
        Action::NotTakingRight,
        Action::TakingLeftHaveRight,
        Action::TakingRightHaveLeft,
        Action::NotTakingLeftHaveRight,
        Action::NotTakingRightHaveLeft,
        Action::Dining,
        Action::EndDining,
        Action::PutLeftHaveRight,
        Action::PutLeft,
        Action::PutRight,
        Action::Starve,
        Action::Finish,
    ];

    /// Took `hand`'s fork while holding nothing.
    pub fn taking(hand: Hand) -> Self {
        match hand {
            Hand::Left => Action::TakingLeft,
            Hand::Right => Action::TakingRight,
        }
    }

    /// Failed to take `hand`'s fork while holding nothing.
    pub fn not_taking(hand: Hand) -> Self {
        match hand {
            Hand::Left => Action::NotTakingLeft,
            Hand::Right => Action::NotTakingRight,
        }
    }

    /// Took `hand`'s fork while already holding the other one.
    pub fn taking_holding(hand: Hand) -> Self {
        match hand {
            Hand::Left => Action::TakingLeftHaveRight,
            Hand::Right => Action::TakingRightHaveLeft,
        }
    }

    /// Failed to take `hand`'s fork while holding the other one.
    pub fn not_taking_holding(hand: Hand) -> Self {
        match hand {
            Hand::Left => Action::NotTakingLeftHaveRight,
            Hand::Right => Action::NotTakingRightHaveLeft,
        }
    }

    /// Put down `hand`'s fork, ending up empty-handed.
    pub fn put(hand: Hand) -> Self {
        match hand {
            Hand::Left => Action::PutLeft,
            Hand::Right => Action::PutRight,
        }
    }

    /// The hand whose fork this action picks up, fails to pick up, or puts down.
    pub fn hand(self) -> Option<Hand> {
        match self {
            Action::TakingLeft
            | Action::NotTakingLeft
            | Action::TakingLeftHaveRight
            | Action::NotTakingLeftHaveRight
            | Action::PutLeftHaveRight
            | Action::PutLeft => Some(Hand::Left),
            Action::TakingRight
            | Action::NotTakingRight
            | Action::TakingRightHaveLeft
            | Action::NotTakingRightHaveLeft
            | Action::PutRight => Some(Hand::Right),
            _ => None,
        }
    }

    /// A fork changed hands into this philosopher.
    pub fn is_take(self) -> bool {
        matches!(
            self,
            Action::TakingLeft
                | Action::TakingRight
                | Action::TakingLeftHaveRight
                | Action::TakingRightHaveLeft
        )
    }

    /// A fork was given back.
    pub fn is_put(self) -> bool {
        matches!(self, Action::PutLeftHaveRight | Action::PutLeft | Action::PutRight)
    }

    /// A non-blocking acquisition came back empty.
    pub fn is_failed_take(self) -> bool {
        matches!(
            self,
            Action::NotTakingLeft
                | Action::NotTakingRight
                | Action::NotTakingLeftHaveRight
                | Action::NotTakingRightHaveLeft
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        assert!(Action::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hand_generic_constructors_mirror() {
        for hand in [Hand::Left, Hand::Right] {
            assert_eq!(Action::taking(hand).hand(), Some(hand));
            assert_eq!(Action::not_taking(hand).hand(), Some(hand));
            assert_eq!(Action::taking_holding(hand).hand(), Some(hand));
            assert_eq!(Action::not_taking_holding(hand).hand(), Some(hand));
            assert_eq!(Action::put(hand).hand(), Some(hand));
            assert_eq!(hand.other().other(), hand);
        }
        assert_eq!(Action::taking_holding(Hand::Right), Action::TakingRightHaveLeft);
        assert_eq!(Action::not_taking_holding(Hand::Left), Action::NotTakingLeftHaveRight);
    }

    #[test]
    fn take_put_and_failure_are_disjoint() {
        for action in Action::ALL {
            let kinds = [action.is_take(), action.is_put(), action.is_failed_take()];
            assert!(kinds.iter().filter(|k| **k).count() <= 1, "{action:?}");
        }
        assert_eq!(Action::ALL.iter().filter(|a| a.is_take()).count(), 4);
        assert_eq!(Action::ALL.iter().filter(|a| a.is_put()).count(), 3);
    }
}
