//! Element tree boundary.
//!
//! The controller never touches the document directly. Everything it needs
//! from the page goes through [`Page`], implemented by the browser DOM on
//! wasm32 and by [`crate::memory_page::MemoryPage`] everywhere else.

use crate::error::PageError;

/// Inline style properties the controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    /// `background-color`
    BackgroundColor,
    /// `animation`
    Animation,
    /// `transform`
    Transform,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Animation => "animation",
            StyleProperty::Transform => "transform",
        }
    }
}

/// Operations the controller performs on the rendered page.
pub trait Page {
    /// Handle to one element. Cheap to clone.
    type Element: Clone;

    /// Element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First `.animation-box` descendant of the element with id `card_id`.
    fn card_box(&self, card_id: &str) -> Option<Self::Element>;

    /// Every `.animation-box` in document order.
    fn animation_boxes(&self) -> Vec<Self::Element>;

    /// Class list membership test.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add a class; a class already present is left alone.
    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<(), PageError>;

    /// Remove every listed class that is present.
    fn remove_classes(&mut self, element: &Self::Element, classes: &[&str])
    -> Result<(), PageError>;

    /// Set an inline style. An empty value clears the override.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);

    /// Replace the element's text content.
    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Current value of a form control, empty for anything else.
    fn value(&self, element: &Self::Element) -> String;
}
