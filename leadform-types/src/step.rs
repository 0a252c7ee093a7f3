use crate::{Answers, StepId};

/// A single page of the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The key this step's answer is stored under. `None` for information steps.
    id: Option<StepId>,

    /// The heading shown to the user. May contain `[id]` placeholders.
    label: String,

    /// Optional explanatory body text. May contain `[id]` placeholders.
    content: Option<String>,

    /// The kind of step (determines input type and validation).
    kind: StepKind,

    /// Overrides the advance button text.
    confirm_label: Option<String>,
}

impl Step {
    fn new(id: Option<StepId>, label: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id,
            label: label.into(),
            content: None,
            kind,
            confirm_label: None,
        }
    }

    /// An informational page with no input.
    pub fn information(label: impl Into<String>) -> Self {
        Self::new(None, label, StepKind::Information)
    }

    /// A required free-form single-line text input.
    pub fn text(id: impl Into<StepId>, label: impl Into<String>) -> Self {
        Self::shaped_text(id, label, TextShape::Free)
    }

    /// A required single-line input that must look like an email address.
    pub fn email(id: impl Into<StepId>, label: impl Into<String>) -> Self {
        Self::shaped_text(id, label, TextShape::Email)
    }

    /// A required single-line input that must look like a phone number.
    pub fn phone(id: impl Into<StepId>, label: impl Into<String>) -> Self {
        Self::shaped_text(id, label, TextShape::Phone)
    }

    fn shaped_text(id: impl Into<StepId>, label: impl Into<String>, shape: TextShape) -> Self {
        Self::new(
            Some(id.into()),
            label,
            StepKind::SingleLineText(TextStep { shape }),
        )
    }

    /// A required text input with type-ahead suggestions.
    pub fn combobox(id: impl Into<StepId>, label: impl Into<String>, options: Vec<Choice>) -> Self {
        Self::new(
            Some(id.into()),
            label,
            StepKind::Combobox(ComboboxStep { options }),
        )
    }

    /// Pick exactly one of the choices.
    pub fn single_select(
        id: impl Into<StepId>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self::new(
            Some(id.into()),
            label,
            StepKind::SingleSelect(SelectStep { choices }),
        )
    }

    /// Pick exactly `max_selections` of the choices.
    pub fn multi_select(
        id: impl Into<StepId>,
        label: impl Into<String>,
        choices: Vec<Choice>,
        max_selections: usize,
    ) -> Self {
        Self::new(
            Some(id.into()),
            label,
            StepKind::MultiSelect(MultiSelectStep {
                choices,
                max_selections,
            }),
        )
    }

    /// Set the explanatory body text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Override the advance button text.
    pub fn with_confirm_label(mut self, confirm_label: impl Into<String>) -> Self {
        self.confirm_label = Some(confirm_label.into());
        self
    }

    /// Get the step id, if this step collects input.
    pub fn id(&self) -> Option<&StepId> {
        self.id.as_ref()
    }

    /// Get the raw (unsubstituted) heading.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the raw (unsubstituted) body text.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Get the step kind.
    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// Get the confirm label override.
    pub fn confirm_label(&self) -> Option<&str> {
        self.confirm_label.as_deref()
    }

    /// The declared choices of a select step. Empty for other kinds.
    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            StepKind::SingleSelect(select) => &select.choices,
            StepKind::MultiSelect(multi) => &multi.choices,
            StepKind::Information | StepKind::SingleLineText(_) | StepKind::Combobox(_) => &[],
        }
    }

    /// The choices of a select step that are visible given the answers so far.
    pub fn visible_choices<'a>(&'a self, answers: &Answers) -> Vec<&'a Choice> {
        self.choices()
            .iter()
            .filter(|choice| choice.is_visible(answers))
            .collect()
    }
}

/// The kind of step, determining input type and validation.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// No input to collect.
    Information,

    /// Single-line text input, always required.
    SingleLineText(TextStep),

    /// Text input with suggestions from a fixed option list.
    Combobox(ComboboxStep),

    /// Choose exactly one option.
    SingleSelect(SelectStep),

    /// Choose an exact number of options.
    MultiSelect(MultiSelectStep),
}

impl StepKind {
    /// Check if this kind collects text typed by the user.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::SingleLineText(_) | Self::Combobox(_))
    }

    /// Check if this kind is answered by picking choices.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::SingleSelect(_) | Self::MultiSelect(_))
    }
}

/// The shape a text answer must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextShape {
    /// Anything non-blank.
    #[default]
    Free,
    /// `local@domain.tld`.
    Email,
    /// A ten-digit phone number with optional country code and separators.
    Phone,
}

/// Configuration for a single-line text step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStep {
    pub shape: TextShape,
}

/// Configuration for a combobox step.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxStep {
    /// The suggestions offered while typing.
    pub options: Vec<Choice>,
}

impl ComboboxStep {
    /// Options whose label contains `query`, case-insensitively. An empty
    /// query matches everything.
    pub fn suggestions(&self, query: &str) -> Vec<&Choice> {
        let query = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| query.is_empty() || option.label.to_lowercase().contains(&query))
            .collect()
    }

    /// The option whose label or value equals `text`, case-insensitively.
    pub fn matching_option(&self, text: &str) -> Option<&Choice> {
        let text = text.trim();
        self.options.iter().find(|option| {
            option.label.eq_ignore_ascii_case(text) || option.value.eq_ignore_ascii_case(text)
        })
    }
}

/// Configuration for a single-select step.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStep {
    pub choices: Vec<Choice>,
}

/// Configuration for a multi-select step.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectStep {
    pub choices: Vec<Choice>,

    /// The exact number of choices that must be selected.
    pub max_selections: usize,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,

    /// Value stored in the answer set.
    pub value: String,

    /// Only show this choice when an earlier answer has a given value.
    pub visible_when: Option<VisibleWhen>,
}

impl Choice {
    /// Create a choice with an explicit value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            visible_when: None,
        }
    }

    /// Create a choice whose value is the slug of its label.
    ///
    /// ```
    /// use leadform_types::Choice;
    ///
    /// let choice = Choice::from_label("Product Manager");
    /// assert_eq!(choice.value, "product-manager");
    /// ```
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = slugify(&label);
        Self::new(label, value)
    }

    /// Only show this choice when the answer to `field_id` equals `equals`.
    pub fn visible_when(mut self, field_id: impl Into<StepId>, equals: impl Into<String>) -> Self {
        self.visible_when = Some(VisibleWhen {
            field_id: field_id.into(),
            equals: equals.into(),
        });
        self
    }

    /// Check whether this choice should be offered given the answers so far.
    pub fn is_visible(&self, answers: &Answers) -> bool {
        match &self.visible_when {
            None => true,
            Some(condition) => condition.holds(answers),
        }
    }
}

/// A condition on an earlier answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWhen {
    pub field_id: StepId,
    pub equals: String,
}

impl VisibleWhen {
    /// Check the condition against the answers so far. Unanswered fields never match.
    pub fn holds(&self, answers: &Answers) -> bool {
        answers
            .get(&self.field_id)
            .is_some_and(|answer| answer.values().contains(&self.equals.as_str()))
    }
}

/// Lowercase a label and join its words with `-`.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Build slug-valued choices from plain labels.
pub fn choices_from_labels(labels: &[&str]) -> Vec<Choice> {
    labels.iter().map(|label| Choice::from_label(*label)).collect()
}
