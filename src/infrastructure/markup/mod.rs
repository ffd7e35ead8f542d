// SPDX-License-Identifier: MPL-2.0
//! Markup-backed element provider.
//!
//! This adapter scans a markup document for elements carrying the marker
//! class and implements [`ElementProvider`] over the result. Parsing is a
//! single streaming pass; the document is never materialized as a tree.
//!
//! The scanner is tolerant of HTML-style markup: end-tag names are not
//! validated, so void elements (`<br>`, `<meta>`, ...) do not trip it up.
//! Structurally broken markup (unterminated tags, bad attribute syntax)
//! still surfaces as [`ProviderError::Markup`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::application::port::elements::{ElementProvider, ProviderError};
use crate::domain::toast::{MarkerClass, ToastElement};

// =============================================================================
// MarkupProvider
// =============================================================================

/// Discovers toast candidates by scanning a markup document.
///
/// # Example
///
/// ```
/// use toast_usher::application::port::elements::ElementProvider;
/// use toast_usher::infrastructure::markup::MarkupProvider;
///
/// let document = r#"<body><div class="toast" id="m1"></div></body>"#;
/// let provider = MarkupProvider::with_default_marker(document);
/// let elements = provider.elements().unwrap();
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements[0].id(), Some("m1"));
/// ```
#[derive(Debug, Clone)]
pub struct MarkupProvider {
    document: String,
    marker: MarkerClass,
}

impl MarkupProvider {
    /// Creates a provider over a document with the given marker class.
    #[must_use]
    pub fn new(document: impl Into<String>, marker: MarkerClass) -> Self {
        Self {
            document: document.into(),
            marker,
        }
    }

    /// Creates a provider over a document with the default `toast` marker.
    #[must_use]
    pub fn with_default_marker(document: impl Into<String>) -> Self {
        Self::new(document, MarkerClass::default())
    }

    /// Returns the marker class this provider matches against.
    #[must_use]
    pub fn marker(&self) -> &MarkerClass {
        &self.marker
    }

    fn scan(&self) -> Result<Vec<ToastElement>, ProviderError> {
        let mut reader = Reader::from_reader(self.document.as_bytes());
        let config = reader.config_mut();
        config.trim_text(true);
        // Tolerate HTML void elements like <br> and <meta>.
        config.check_end_names = false;

        let mut elements = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if let Some(element) = self.element_from_tag(e, elements.len())? {
                        elements.push(element);
                    }
                }
                Ok(Event::Eof) => break,
                Err(err) => {
                    return Err(ProviderError::Markup(format!(
                        "parse error at byte {}: {err}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(elements)
    }

    /// Builds a [`ToastElement`] from an opening tag if it carries the marker.
    fn element_from_tag(
        &self,
        tag: &BytesStart<'_>,
        position: usize,
    ) -> Result<Option<ToastElement>, ProviderError> {
        let name = String::from_utf8_lossy(tag.name().as_ref()).to_string();

        let mut id: Option<String> = None;
        let mut class_attr: Option<String> = None;
        let mut attributes: Vec<(String, String)> = Vec::new();

        for attr in tag.attributes() {
            let attr = attr.map_err(|err| {
                ProviderError::Markup(format!("bad attribute on <{name}>: {err}"))
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| {
                    ProviderError::Markup(format!("bad attribute value on <{name}>: {err}"))
                })?
                .into_owned();

            match key.as_str() {
                "class" => class_attr = Some(value),
                "id" => id = Some(value),
                _ => attributes.push((key, value)),
            }
        }

        let class_attr = match class_attr {
            Some(value) => value,
            None => return Ok(None),
        };
        if !self.marker.matches_attr(&class_attr) {
            return Ok(None);
        }

        let mut element = ToastElement::new(name, position);
        if let Some(id) = id {
            element = element.with_id(id);
        }
        for class in class_attr.split_whitespace() {
            element = element.with_class(class);
        }
        for (key, value) in attributes {
            element = element.with_attribute(key, value);
        }
        Ok(Some(element))
    }
}

impl ElementProvider for MarkupProvider {
    fn elements(&self) -> Result<Vec<ToastElement>, ProviderError> {
        self.scan()
    }
}

// =============================================================================
// Tests
// =============================================================================
