//! State machine trait for phase enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on screen lifecycle phases.

use super::ValidationError;

/// Trait for phase enums that represent state machines.
///
/// Implementors define valid transitions and a stable name for each
/// state, and get validated transition methods for free.
///
/// # Example
///
/// ```ignore
/// let next = DirectoryPhase::Loading.transition_to(DirectoryPhase::Idle)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Stable lowercase name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::InvalidTransition {
                from: self.name(),
                to: target.name(),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPhase {
        Draft,
        Active,
        Closed,
    }

    impl StateMachine for TestPhase {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TestPhase::*;
            matches!((self, target), (Draft, Active) | (Active, Closed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TestPhase::*;
            match self {
                Draft => vec![Active],
                Active => vec![Closed],
                Closed => vec![],
            }
        }

        fn name(&self) -> &'static str {
            match self {
                TestPhase::Draft => "draft",
                TestPhase::Active => "active",
                TestPhase::Closed => "closed",
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(TestPhase::Draft.transition_to(TestPhase::Active), Ok(TestPhase::Active));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = TestPhase::Draft.transition_to(TestPhase::Closed).unwrap_err();
        assert_eq!(err.to_string(), "Cannot transition from draft to closed");
    }

    #[test]
    fn is_terminal_only_for_closed() {
        assert!(TestPhase::Closed.is_terminal());
        assert!(!TestPhase::Draft.is_terminal());
    }
}
