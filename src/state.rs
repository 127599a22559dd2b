//! View State
//!
//! One-shot fetch state machine for the item list. The state starts empty
//! and settles once per mount into either loaded items or a fetch error.

use crate::models::Item;

/// User-facing message shown for any failed fetch. The underlying cause
/// goes to the console, not to the user.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch items";

/// Component-local state: the fetched items plus an optional error.
///
/// Transitions are explicit methods applied through `WriteSignal::update`.
/// `items` and `error` are independent: a failed fetch leaves `items` at
/// its prior value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Items in server response order
    pub items: Vec<Item>,
    /// Message for the user when the last fetch failed
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new fetch attempt clears any stale error.
    pub fn on_fetch_start(&mut self) {
        self.error = None;
    }

    /// Store the response payload verbatim.
    pub fn on_fetch_success(&mut self, items: Vec<Item>) {
        self.items = items;
        self.error = None;
    }

    /// Record a failed attempt. Items keep their prior value.
    pub fn on_fetch_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_empty_without_error() {
        let state = ViewState::new();
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_success_stores_items_in_response_order() {
        let mut state = ViewState::new();
        state.on_fetch_start();
        state.on_fetch_success(vec![item(1, "A"), item(2, "B")]);

        let names: Vec<&str> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_success_with_empty_payload_renders_no_entries() {
        let mut state = ViewState::new();
        state.on_fetch_start();
        state.on_fetch_success(Vec::new());

        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_sets_message_and_leaves_items_empty() {
        let mut state = ViewState::new();
        state.on_fetch_start();
        state.on_fetch_failure(FETCH_ERROR_MESSAGE);

        assert_eq!(state.error.as_deref(), Some("Failed to fetch items"));
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_failure_keeps_previously_loaded_items() {
        let mut state = ViewState::new();
        state.on_fetch_success(vec![item(1, "A")]);
        state.on_fetch_failure(FETCH_ERROR_MESSAGE);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch items"));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = ViewState::new();
        state.on_fetch_failure(FETCH_ERROR_MESSAGE);
        state.on_fetch_success(vec![item(3, "C")]);

        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_new_attempt_clears_stale_error() {
        let mut state = ViewState::new();
        state.on_fetch_failure(FETCH_ERROR_MESSAGE);
        state.on_fetch_start();

        assert!(state.error.is_none());
    }

    #[test]
    fn test_duplicate_ids_are_not_deduplicated() {
        let mut state = ViewState::new();
        state.on_fetch_success(vec![item(1, "A"), item(1, "A again")]);

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].name, "A");
        assert_eq!(state.items[1].name, "A again");
    }
}
