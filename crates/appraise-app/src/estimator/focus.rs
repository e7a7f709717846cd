//! Keyboard focus chain for the estimator form
//!
//! Focus moves through a fixed linear order. Pressing the confirm key in a
//! field advances to the next target; the chain ends at the submit control.
//! Moving focus never touches form values.

/// A focusable element of the estimator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Area,
    Bhk,
    Location,
    Submit,
}

/// Confirm-key order
pub const FOCUS_CHAIN: [FocusTarget; 4] = [
    FocusTarget::Area,
    FocusTarget::Bhk,
    FocusTarget::Location,
    FocusTarget::Submit,
];

/// Index reached by confirming at `index`; stays on the last target
pub fn next(index: usize) -> usize {
    (index + 1).min(FOCUS_CHAIN.len() - 1)
}

/// Tab order, wrapping from the submit control back to the first field
pub fn cycle_next(index: usize) -> usize {
    (index + 1) % FOCUS_CHAIN.len()
}

/// Shift+Tab order, wrapping from the first field to the submit control
pub fn cycle_prev(index: usize) -> usize {
    (index + FOCUS_CHAIN.len() - 1) % FOCUS_CHAIN.len()
}

impl FocusTarget {
    pub fn index(self) -> usize {
        match self {
            FocusTarget::Area => 0,
            FocusTarget::Bhk => 1,
            FocusTarget::Location => 2,
            FocusTarget::Submit => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        FOCUS_CHAIN[index.min(FOCUS_CHAIN.len() - 1)]
    }

    /// Target reached by pressing the confirm key here
    pub fn confirmed(self) -> Self {
        Self::from_index(next(self.index()))
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, FocusTarget::Area | FocusTarget::Bhk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_follows_linear_chain() {
        assert_eq!(FocusTarget::Area.confirmed(), FocusTarget::Bhk);
        assert_eq!(FocusTarget::Bhk.confirmed(), FocusTarget::Location);
        assert_eq!(FocusTarget::Location.confirmed(), FocusTarget::Submit);
    }

    #[test]
    fn test_chain_ends_at_submit() {
        assert_eq!(next(3), 3);
        assert_eq!(FocusTarget::Submit.confirmed(), FocusTarget::Submit);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle_next(3), 0);
        assert_eq!(cycle_prev(0), 3);
        assert_eq!(cycle_prev(2), 1);
    }

    #[test]
    fn test_index_round_trips_through_chain() {
        for (i, target) in FOCUS_CHAIN.iter().enumerate() {
            assert_eq!(target.index(), i);
            assert_eq!(FocusTarget::from_index(i), *target);
        }
    }

    #[test]
    fn test_text_inputs() {
        assert!(FocusTarget::Area.is_text_input());
        assert!(FocusTarget::Bhk.is_text_input());
        assert!(!FocusTarget::Location.is_text_input());
        assert!(!FocusTarget::Submit.is_text_input());
    }
}
