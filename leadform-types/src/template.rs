//! `[placeholder]` handling for step text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Answers;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]").expect("placeholder pattern is valid"));

/// Replace every `[id]` in `template` with the answer to `id`.
///
/// Unanswered ids render as the bare id, list answers are joined with `", "`,
/// and substituted values are not scanned again.
///
/// ```
/// use leadform_types::{Answers, substitute};
///
/// let mut answers = Answers::new();
/// assert_eq!(substitute("Hi [fname]!", &answers), "Hi fname!");
///
/// answers.insert("fname", "Ada");
/// assert_eq!(substitute("Hi [fname]!", &answers), "Hi Ada!");
/// ```
pub fn substitute(template: &str, answers: &Answers) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let id = &caps[1];
            answers
                .lookup(id)
                .map(|answer| answer.display())
                .unwrap_or_else(|| id.to_string())
        })
        .into_owned()
}

/// The ids referenced by placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_placeholder_renders_bare_id() {
        assert_eq!(substitute("[fname]", &Answers::new()), "fname");
    }

    #[test]
    fn answered_placeholder_is_replaced() {
        let mut answers = Answers::new();
        answers.insert("fname", "Ada");
        assert_eq!(substitute("[fname]", &answers), "Ada");
        assert_eq!(
            substitute("What's your last name, [fname]?", &answers),
            "What's your last name, Ada?"
        );
    }

    #[test]
    fn list_answers_are_joined() {
        let mut answers = Answers::new();
        answers.insert("goals", vec!["learn", "network"]);
        assert_eq!(substitute("Goals: [goals]", &answers), "Goals: learn, network");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let mut answers = Answers::new();
        answers.insert("fname", "[lname]");
        answers.insert("lname", "Lovelace");
        assert_eq!(substitute("[fname]", &answers), "[lname]");
    }

    #[test]
    fn multiple_and_adjacent_placeholders() {
        let mut answers = Answers::new();
        answers.insert("fname", "Ada");
        assert_eq!(substitute("[fname][lname]", &answers), "Adalname");
        assert_eq!(substitute("no placeholders", &answers), "no placeholders");
        assert_eq!(substitute("[]", &answers), "[]");
    }

    #[test]
    fn lists_placeholder_ids() {
        assert_eq!(
            placeholders("[fname], what's your goal, [fname] [role]?"),
            vec!["fname", "fname", "role"]
        );
        assert!(placeholders("plain").is_empty());
    }
}
