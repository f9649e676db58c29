//! Form model
//!
//! Owns the four pieces of state behind the form: the raw input text, the
//! last successful response, the last error message, and the active filter
//! selection. The model enforces the submission invariant: both outcome
//! slots are cleared when an attempt begins, and exactly one is populated
//! when it resolves.

use serde_json::Value;

use crate::form::error::SubmitError;
use crate::form::filter::{FilterSelection, FilterTag, FilteredView};

/// State behind the form: input, outcome slots, and filter selection
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    /// Raw input text, edited freely; validated only on submission
    input: String,
    /// Last successful response body, stored as received
    response: Option<Value>,
    /// Message from the last failed attempt
    error: Option<String>,
    /// Active display filters
    filters: FilterSelection,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Append a character to the input text
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character of the input text, if any
    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    /// Clear the input text entirely
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Replace the active filter set unconditionally
    pub fn set_filters(&mut self, selection: FilterSelection) {
        self.filters = selection;
    }

    /// Toggle a single filter tag
    pub fn toggle_filter(&mut self, tag: FilterTag) {
        self.filters.toggle(tag);
    }

    /// Begin a submission attempt: both outcome slots are cleared before
    /// validation or dispatch happens.
    pub fn begin_submission(&mut self) {
        self.response = None;
        self.error = None;
    }

    /// Resolve the current attempt with a successful response body,
    /// stored as received.
    pub fn succeed(&mut self, body: Value) {
        self.response = Some(body);
        self.error = None;
    }

    /// Resolve the current attempt with a failure message.
    pub fn fail(&mut self, error: &SubmitError) {
        self.error = Some(error.to_string());
        self.response = None;
    }

    /// Apply a submission outcome to the outcome slots
    pub fn resolve(&mut self, outcome: Result<Value, SubmitError>) {
        match outcome {
            Ok(body) => self.succeed(body),
            Err(error) => self.fail(&error),
        }
    }

    /// Whether the last attempt has resolved to either outcome
    pub fn has_outcome(&self) -> bool {
        self.response.is_some() || self.error.is_some()
    }

    /// Derive the display projection for the current state
    pub fn filtered_view(&self) -> FilteredView {
        FilteredView::derive(self.response.as_ref(), &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_model_should_create_with_defaults() {
        let model = FormModel::new();

        assert!(model.input().is_empty());
        assert!(model.response().is_none());
        assert!(model.error().is_none());
        assert!(model.filters().is_empty());
        assert!(!model.has_outcome());
    }

    #[test]
    fn form_model_should_edit_input() {
        let mut model = FormModel::new();

        model.insert_char('{');
        model.insert_char('}');
        assert_eq!(model.input(), "{}");

        model.delete_char();
        assert_eq!(model.input(), "{");

        model.clear_input();
        assert!(model.input().is_empty());

        // Deleting from empty input is a no-op
        model.delete_char();
        assert!(model.input().is_empty());
    }

    #[test]
    fn begin_submission_should_clear_both_outcome_slots() {
        let mut model = FormModel::new();
        model.succeed(json!({"numbers": ["1"]}));
        assert!(model.has_outcome());

        model.begin_submission();

        assert!(model.response().is_none());
        assert!(model.error().is_none());
        assert!(!model.has_outcome());
    }

    #[test]
    fn resolve_should_populate_exactly_one_slot() {
        let mut model = FormModel::new();

        model.begin_submission();
        model.resolve(Ok(json!({"numbers": ["1"]})));
        assert!(model.response().is_some());
        assert!(model.error().is_none());

        model.begin_submission();
        model.resolve(Err(SubmitError::request("API request failed.")));
        assert!(model.response().is_none());
        assert_eq!(model.error(), Some("API request failed."));
    }

    #[test]
    fn success_should_clear_prior_error_and_failure_prior_response() {
        let mut model = FormModel::new();

        model.fail(&SubmitError::validation("bad"));
        model.succeed(json!({"alphabets": ["A"]}));
        assert!(model.error().is_none());

        model.fail(&SubmitError::request("down"));
        assert!(model.response().is_none());
    }

    #[test]
    fn form_model_should_store_response_as_received() {
        let mut model = FormModel::new();
        let body = json!({"numbers": ["34"], "unexpected": {"nested": true}});

        model.succeed(body.clone());

        assert_eq!(model.response(), Some(&body));
    }

    #[test]
    fn filter_changes_should_not_touch_outcome_slots() {
        let mut model = FormModel::new();
        model.succeed(json!({"numbers": ["1"]}));

        model.toggle_filter(FilterTag::Numbers);
        model.set_filters(FilterSelection::all());

        assert!(model.response().is_some());
        assert!(model.error().is_none());
    }

    #[test]
    fn filtered_view_should_follow_selection() {
        let mut model = FormModel::new();
        model.succeed(json!({
            "numbers": ["34", "4"],
            "alphabets": ["X", "I"],
            "highest_alphabet": "X"
        }));

        assert!(model.filtered_view().is_empty());

        model.toggle_filter(FilterTag::Numbers);
        assert_eq!(model.filtered_view().result_lines(), vec!["Numbers: 34,4"]);
    }

    #[test]
    fn filtered_view_should_be_empty_without_response() {
        let mut model = FormModel::new();
        model.set_filters(FilterSelection::all());

        assert!(model.filtered_view().is_empty());
    }
}
