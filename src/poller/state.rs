/// Mutable state carried between cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    pub(crate) cursor: i64,
    pub(crate) last_error: Option<String>,
}

impl PollState {
    pub fn starting_at(cursor: i64) -> Self {
        Self {
            cursor,
            last_error: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Records a fully successful cycle.
    pub(crate) fn complete(&mut self, current_date: i64) {
        self.cursor = current_date;
        self.last_error = None;
    }

    /// Returns true when `diagnostic` differs from the last surfaced one, remembering it.
    pub(crate) fn should_surface(&mut self, diagnostic: &str) -> bool {
        if self.last_error.as_deref() == Some(diagnostic) {
            return false;
        }

        self.last_error = Some(diagnostic.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::PollState;

    #[test]
    fn repeated_diagnostic_is_surfaced_once() {
        let mut state = PollState::default();
        assert!(state.should_surface("boom"));
        assert!(!state.should_surface("boom"));
        assert!(state.should_surface("other"));
        assert!(state.should_surface("boom"));
    }

    #[test]
    fn completion_advances_cursor_and_clears_error() {
        let mut state = PollState::starting_at(10);
        assert!(state.should_surface("boom"));

        state.complete(1000);
        assert_eq!(state.cursor(), 1000);
        assert_eq!(state.last_error, None);
        assert!(state.should_surface("boom"));
    }
}
