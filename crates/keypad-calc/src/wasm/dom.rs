//! Mock DOM
//!
//! An observable stand-in for the browser document: elements carry text,
//! attributes and classes, and every dispatched event is recorded so tests
//! can assert on what the page saw.

use std::collections::BTreeMap;

/// Class toggled while a button is touched or lit by press feedback
pub const ACTIVE_CLASS: &str = "active";

/// Class marking the highlighted operator button
pub const SELECTED_CLASS: &str = "selected";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes such as `data-type`
    pub attributes: BTreeMap<String, String>,
    /// CSS classes in insertion order
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        if self.text_content != text {
            self.text_content = text.to_string();
        }
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// True when the class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns an attribute value
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Mouse click on a button
    Click {
        /// Target element id
        element_id: String,
    },
    /// Keyboard key pressed anywhere on the page
    KeyDown {
        /// DOM key name (`"7"`, `"Enter"`, `"Escape"`, ...)
        key: String,
    },
    /// Finger down on a button
    TouchStart {
        /// Target element id
        element_id: String,
    },
    /// Finger lifted from a button
    TouchEnd {
        /// Target element id
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }

    /// Creates a touchstart event
    #[must_use]
    pub fn touch_start(element_id: &str) -> Self {
        Self::TouchStart {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a touchend event
    #[must_use]
    pub fn touch_end(element_id: &str) -> Self {
        Self::TouchEnd {
            element_id: element_id.to_string(),
        }
    }
}

/// In-memory document
#[derive(Debug, Default)]
pub struct MockDom {
    elements: BTreeMap<String, DomElement>,
    order: Vec<String>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element; elements without an id are not addressable and are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Looks up an element by id
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up an element by id for mutation
    pub fn element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Elements in registration order
    pub fn elements(&self) -> impl Iterator<Item = &DomElement> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Records an event and applies its built-in effect.
    ///
    /// Touch events toggle [`ACTIVE_CLASS`] on their target; clicks and key
    /// presses have no intrinsic effect and are left to listeners.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::TouchStart { element_id } => {
                if let Some(el) = self.elements.get_mut(element_id) {
                    el.add_class(ACTIVE_CLASS);
                }
            }
            DomEvent::TouchEnd { element_id } => {
                if let Some(el) = self.elements.get_mut(element_id) {
                    el.remove_class(ACTIVE_CLASS);
                }
            }
            DomEvent::Click { .. } | DomEvent::KeyDown { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Events seen so far
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Forgets recorded events
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Sets the text of an element if it exists
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.set_text(text);
        }
    }

    /// Text of an element
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text_content.as_str())
    }

    /// Adds or removes a class on an element if it exists
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.elements.get_mut(id) {
            el.toggle_class(class, on);
        }
    }

    /// True when the element exists and carries the class
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|el| el.has_class(class))
    }

    /// Ids of elements carrying the class
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<&str> {
        self.elements()
            .filter(|el| el.has_class(class))
            .map(|el| el.id.as_str())
            .collect()
    }
}
