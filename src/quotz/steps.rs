//! Step-indicator collaborator contract.
//!
//! The quote form walks a fixed four-stage sequence. The indicator itself is
//! a rendering concern owned by the UI; this module only provides the
//! ordered stages and the per-stage state derivation a renderer needs. No
//! persistence, no data dependency on the storage layer.

/// The ordered stages of the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormStep {
    Company,
    Client,
    Items,
    Summary,
}

/// How one stage marker should render relative to the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [
        FormStep::Company,
        FormStep::Client,
        FormStep::Items,
        FormStep::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormStep::Company => "Empresa",
            FormStep::Client => "Cliente",
            FormStep::Items => "Itens",
            FormStep::Summary => "Resumo",
        }
    }

    /// Position in the sequence, 0-based.
    pub fn index(self) -> usize {
        match self {
            FormStep::Company => 0,
            FormStep::Client => 1,
            FormStep::Items => 2,
            FormStep::Summary => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<FormStep> {
        Self::ALL.get(index).copied()
    }

    /// This stage's state when `current` is the active stage.
    pub fn state(self, current: FormStep) -> StepState {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Active,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_round_trip() {
        for step in FormStep::ALL {
            assert_eq!(FormStep::from_index(step.index()), Some(step));
        }
        assert_eq!(FormStep::from_index(4), None);
    }

    #[test]
    fn states_relative_to_the_active_stage() {
        let current = FormStep::Items;
        assert_eq!(FormStep::Company.state(current), StepState::Completed);
        assert_eq!(FormStep::Items.state(current), StepState::Active);
        assert_eq!(FormStep::Summary.state(current), StepState::Upcoming);
    }
}
