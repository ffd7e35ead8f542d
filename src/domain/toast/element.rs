// SPDX-License-Identifier: MPL-2.0
//! Toast element value object.

// =============================================================================
// ToastElement
// =============================================================================

/// A single markup element discovered as a toast candidate.
///
/// The element is a snapshot of what a provider found in the document: tag
/// name, optional `id`, class tokens, remaining attributes, and the
/// zero-based position within the discovered sequence. Positions follow
/// document order, so replaying a batch of elements preserves the order in
/// which they appeared on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    position: usize,
}

impl ToastElement {
    /// Creates a new element with the given tag name and document position.
    #[must_use]
    pub fn new(tag: impl Into<String>, position: usize) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            position,
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a class token.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Appends an attribute other than `id` and `class`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the `id` attribute, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the class tokens in attribute order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns the remaining attributes in attribute order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the zero-based position within the discovered sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the element carries the given class token.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|token| token == class)
    }

    /// Returns the value of an attribute other than `id` and `class`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns a short selector-style description, e.g. `div#message-1`.
    ///
    /// Used in reports and diagnostic events where the full element would
    /// be noise.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.id {
            Some(id) => format!("{}#{}", self.tag, id),
            None => match self.classes.first() {
                Some(class) => format!("{}.{}", self.tag, class),
                None => self.tag.clone(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
