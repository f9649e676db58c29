//! Filter tags, filter selection, and the derived filtered view
//!
//! The filtered view is a pure projection of (response, selection). It owns
//! no state of its own and is recomputed on every render. Selection order is
//! irrelevant; the projection always emits fields in the fixed sequence
//! numbers, alphabets, maximum-alphabet.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// The three display categories offered by the multi-select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    Numbers,
    Alphabets,
    MaximumAlphabet,
}

impl FilterTag {
    /// All tags in display order
    pub const ALL: [FilterTag; 3] = [
        FilterTag::Numbers,
        FilterTag::Alphabets,
        FilterTag::MaximumAlphabet,
    ];

    /// Label shown in the multi-select control and the results panel
    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::Numbers => "Numbers",
            FilterTag::Alphabets => "Alphabets",
            FilterTag::MaximumAlphabet => "Maximum Alphabet",
        }
    }

    /// Field name this tag reads from the stored response
    pub fn response_field(&self) -> &'static str {
        match self {
            FilterTag::Numbers => "numbers",
            FilterTag::Alphabets => "alphabets",
            FilterTag::MaximumAlphabet => "highest_alphabet",
        }
    }
}

/// The active set of display filters
///
/// Any subset of the three tags is valid, including the empty set. Toggling
/// never triggers a request; it only affects what the view projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: HashSet<FilterTag>,
}

impl FilterSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection with all three tags active
    pub fn all() -> Self {
        let mut selection = Self::new();
        selection.replace(FilterTag::ALL);
        selection
    }

    /// Replace the active set unconditionally
    pub fn replace(&mut self, tags: impl IntoIterator<Item = FilterTag>) {
        self.selected = tags.into_iter().collect();
    }

    /// Toggle a single tag in or out of the set
    pub fn toggle(&mut self, tag: FilterTag) {
        if !self.selected.remove(&tag) {
            self.selected.insert(tag);
        }
    }

    pub fn contains(&self, tag: FilterTag) -> bool {
        self.selected.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

/// The display-only projection of a stored response
///
/// Fields are present only when the matching tag is selected and the
/// response carries the field; values are copied as received, with no
/// structural validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabets: Option<Value>,
    #[serde(rename = "maximumAlphabet", skip_serializing_if = "Option::is_none")]
    pub maximum_alphabet: Option<Value>,
}

impl FilteredView {
    /// Derive the view from the stored response and the active filters.
    ///
    /// Pure and side-effect free: an absent response yields an empty view
    /// regardless of selection, and unselected tags contribute nothing.
    pub fn derive(response: Option<&Value>, filters: &FilterSelection) -> Self {
        let Some(response) = response else {
            return Self::default();
        };

        let field = |tag: FilterTag| {
            filters
                .contains(tag)
                .then(|| response.get(tag.response_field()).cloned())
                .flatten()
        };

        Self {
            numbers: field(FilterTag::Numbers),
            alphabets: field(FilterTag::Alphabets),
            maximum_alphabet: field(FilterTag::MaximumAlphabet),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_none() && self.alphabets.is_none() && self.maximum_alphabet.is_none()
    }

    /// Render the view as labelled result lines in the fixed display order.
    ///
    /// Array fields are joined with `,`; scalar fields print as-is.
    pub fn result_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(numbers) = &self.numbers {
            lines.push(format!("Numbers: {}", join_tokens(numbers)));
        }
        if let Some(alphabets) = &self.alphabets {
            lines.push(format!("Alphabets: {}", join_tokens(alphabets)));
        }
        if let Some(maximum) = &self.maximum_alphabet {
            lines.push(format!("Maximum Alphabet: {}", join_tokens(maximum)));
        }
        lines
    }
}

/// Join a response field into display text: arrays become their elements
/// joined by `,`, strings print unquoted, anything else prints as JSON.
fn join_tokens(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(token_text)
            .collect::<Vec<_>>()
            .join(","),
        other => token_text(other),
    }
}

fn token_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!({
            "numbers": ["1", "2"],
            "alphabets": ["A"],
            "highest_alphabet": "A"
        })
    }

    #[test]
    fn filter_selection_should_start_empty() {
        let selection = FilterSelection::new();

        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        assert!(!selection.contains(FilterTag::Numbers));
    }

    #[test]
    fn filter_selection_should_toggle_tags() {
        let mut selection = FilterSelection::new();

        selection.toggle(FilterTag::Numbers);
        assert!(selection.contains(FilterTag::Numbers));

        selection.toggle(FilterTag::Numbers);
        assert!(!selection.contains(FilterTag::Numbers));
    }

    #[test]
    fn filter_selection_should_replace_unconditionally() {
        let mut selection = FilterSelection::all();
        assert_eq!(selection.len(), 3);

        selection.replace([FilterTag::Alphabets]);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(FilterTag::Alphabets));

        // The empty set is a valid selection
        selection.replace([]);
        assert!(selection.is_empty());
    }

    #[test]
    fn derive_should_be_pure() {
        let response = sample_response();
        let mut filters = FilterSelection::new();
        filters.toggle(FilterTag::Numbers);

        let first = FilteredView::derive(Some(&response), &filters);
        let second = FilteredView::derive(Some(&response), &filters);

        assert_eq!(first, second);
    }

    #[test]
    fn derive_should_be_empty_for_empty_selection() {
        let response = sample_response();

        let view = FilteredView::derive(Some(&response), &FilterSelection::new());

        assert!(view.is_empty());
        assert!(view.result_lines().is_empty());
    }

    #[test]
    fn derive_should_be_empty_without_response() {
        let view = FilteredView::derive(None, &FilterSelection::all());

        assert!(view.is_empty());
    }

    #[test]
    fn derive_should_project_full_selection() {
        let response = sample_response();

        let view = FilteredView::derive(Some(&response), &FilterSelection::all());

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "numbers": ["1", "2"],
                "alphabets": ["A"],
                "maximumAlphabet": "A"
            })
        );
    }

    #[test]
    fn derive_should_skip_unselected_tags() {
        let response = sample_response();
        let mut filters = FilterSelection::new();
        filters.toggle(FilterTag::Alphabets);

        let view = FilteredView::derive(Some(&response), &filters);

        assert!(view.numbers.is_none());
        assert_eq!(view.alphabets, Some(json!(["A"])));
        assert!(view.maximum_alphabet.is_none());
    }

    #[test]
    fn derive_should_tolerate_missing_response_fields() {
        // The response contract is unchecked; absent fields simply do not
        // appear in the view.
        let response = json!({ "numbers": ["7"] });

        let view = FilteredView::derive(Some(&response), &FilterSelection::all());

        assert_eq!(view.numbers, Some(json!(["7"])));
        assert!(view.alphabets.is_none());
        assert!(view.maximum_alphabet.is_none());
        assert_eq!(view.result_lines(), vec!["Numbers: 7"]);
    }

    #[test]
    fn result_lines_should_use_fixed_order_and_labels() {
        let response = json!({
            "numbers": ["34", "4"],
            "alphabets": ["X", "I"],
            "highest_alphabet": "X"
        });

        let view = FilteredView::derive(Some(&response), &FilterSelection::all());

        assert_eq!(
            view.result_lines(),
            vec![
                "Numbers: 34,4",
                "Alphabets: X,I",
                "Maximum Alphabet: X"
            ]
        );
    }

    #[test]
    fn result_lines_should_render_only_selected_numbers() {
        let response = json!({
            "numbers": ["34", "4"],
            "alphabets": ["X", "I"],
            "highest_alphabet": "X"
        });
        let mut filters = FilterSelection::new();
        filters.toggle(FilterTag::Numbers);

        let view = FilteredView::derive(Some(&response), &filters);

        assert_eq!(view.result_lines(), vec!["Numbers: 34,4"]);
    }

    #[test]
    fn join_tokens_should_print_non_string_elements_as_json() {
        assert_eq!(join_tokens(&json!([1, "2", true])), "1,2,true");
        assert_eq!(join_tokens(&json!("X")), "X");
        assert_eq!(join_tokens(&json!(42)), "42");
    }
}
