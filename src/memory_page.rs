//! In-memory element tree.
//!
//! Mirrors the parts of the DOM the controller uses: ids, class lists,
//! inline styles, attributes, text and form values. Used by the native
//! console and by tests.

use std::collections::BTreeMap;

use crate::constants::{
    ANIMATION_BOX_CLASS, CHANGE_COLOR_CLASS, DATA_TARGET_ATTR, TOGGLE_ANIMATION_CLASS, ids,
};
use crate::error::PageError;
use crate::page::{Page, StyleProperty};

/// Index of a node in a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    id: Option<String>,
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<StyleProperty, String>,
    text: String,
    value: String,
}

/// Flat arena of nodes; insertion order is document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    nodes: Vec<Node>,
}

impl MemoryPage {
    /// Empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page laid out like the demo markup: `card_count` cards named
    /// `card-1..card-N`, each with one animation box and its two buttons,
    /// followed by the global controls, interactive box and timing form.
    pub fn demo(card_count: usize) -> Self {
        let mut page = Self::new();

        for n in 1..=card_count {
            let card_id = format!("card-{n}");
            let card = page.add_element(None, Some(&card_id), &["animation-card"]);
            page.add_element(Some(card), None, &[ANIMATION_BOX_CLASS]);
            for class in [TOGGLE_ANIMATION_CLASS, CHANGE_COLOR_CLASS] {
                let button = page.add_element(Some(card), None, &[class]);
                page.set_attribute(button, DATA_TARGET_ATTR, &card_id);
            }
        }

        for id in [ids::START_ALL, ids::STOP_ALL, ids::RESET_ALL] {
            page.add_element(None, Some(id), &["control-button"]);
        }

        page.add_element(None, Some(ids::INTERACTIVE_BOX), &["demo-box"]);
        let select = page.add_element(None, Some(ids::ANIMATION_SELECT), &[]);
        page.set_value(select, "bounce");
        page.add_element(None, Some(ids::APPLY_ANIMATION), &[]);

        page.add_element(None, Some(ids::DURATION_INPUT), &[]);
        page.add_element(None, Some(ids::DELAY_INPUT), &[]);
        page.add_element(None, Some(ids::CALCULATE_TIMING), &[]);
        page.add_element(None, Some(ids::TIMING_RESULT), &[]);

        page
    }

    /// Append an element.
    pub fn add_element(
        &mut self,
        parent: Option<NodeId>,
        id: Option<&str>,
        classes: &[&str],
    ) -> NodeId {
        self.nodes.push(Node {
            id: id.map(str::to_string),
            parent,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Set an attribute.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Read an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    /// Set a form control's value.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node.0].value = value.to_string();
    }

    /// The element's id, if any.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].id.as_deref()
    }

    /// Class list in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    /// Inline style value, if set.
    pub fn style(&self, node: NodeId, property: StyleProperty) -> Option<&str> {
        self.nodes[node.0].styles.get(&property).map(String::as_str)
    }

    /// Text content.
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// First element carrying `class` whose `data-target` equals `target`.
    pub fn find_control(&self, class: &str, target: &str) -> Option<NodeId> {
        self.ids().find(|&node| {
            self.has_class(&node, class) && self.attribute(node, DATA_TARGET_ATTR) == Some(target)
        })
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent.0].parent;
        }
        false
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids().find(|&node| self.id(node) == Some(id))
    }

    fn card_box(&self, card_id: &str) -> Option<NodeId> {
        let card = self.element_by_id(card_id)?;
        self.ids().find(|&node| {
            self.has_class(&node, ANIMATION_BOX_CLASS) && self.is_descendant_of(node, card)
        })
    }

    fn animation_boxes(&self) -> Vec<NodeId> {
        self.ids()
            .filter(|node| self.has_class(node, ANIMATION_BOX_CLASS))
            .collect()
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: &NodeId, class: &str) -> Result<(), PageError> {
        PageError::check_token(class)?;
        if !self.has_class(element, class) {
            self.nodes[element.0].classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_classes(&mut self, element: &NodeId, classes: &[&str]) -> Result<(), PageError> {
        for class in classes {
            PageError::check_token(class)?;
        }
        self.nodes[element.0]
            .classes
            .retain(|c| !classes.contains(&c.as_str()));
        Ok(())
    }

    fn set_style(&mut self, element: &NodeId, property: StyleProperty, value: &str) {
        let styles = &mut self.nodes[element.0].styles;
        if value.is_empty() {
            styles.remove(&property);
        } else {
            styles.insert(property, value.to_string());
        }
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        self.nodes[element.0].text = text.to_string();
    }

    fn value(&self, element: &NodeId) -> String {
        self.nodes[element.0].value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout() {
        let page = MemoryPage::demo(3);
        assert_eq!(page.animation_boxes().len(), 3);
        assert!(page.element_by_id(ids::INTERACTIVE_BOX).is_some());
        assert!(page.card_box("card-2").is_some());
        assert!(page.card_box("card-4").is_none());
        assert!(page.find_control(TOGGLE_ANIMATION_CLASS, "card-3").is_some());
    }

    #[test]
    fn test_card_box_is_scoped_to_card() {
        let page = MemoryPage::demo(2);
        let boxes = page.animation_boxes();
        assert_eq!(page.card_box("card-1"), Some(boxes[0]));
        assert_eq!(page.card_box("card-2"), Some(boxes[1]));
    }

    #[test]
    fn test_class_list_semantics() {
        let mut page = MemoryPage::new();
        let node = page.add_element(None, None, &["a"]);
        page.add_class(&node, "a").unwrap();
        page.add_class(&node, "b").unwrap();
        assert_eq!(page.classes(node), ["a", "b"]);

        page.remove_classes(&node, &["a", "missing"]).unwrap();
        assert_eq!(page.classes(node), ["b"]);

        assert!(page.add_class(&node, "").is_err());
        assert!(page.add_class(&node, "x y").is_err());
    }

    #[test]
    fn test_empty_style_clears_override() {
        let mut page = MemoryPage::new();
        let node = page.add_element(None, None, &[]);
        page.set_style(&node, StyleProperty::BackgroundColor, "#fff");
        assert_eq!(page.style(node, StyleProperty::BackgroundColor), Some("#fff"));
        page.set_style(&node, StyleProperty::BackgroundColor, "");
        assert_eq!(page.style(node, StyleProperty::BackgroundColor), None);
    }
}
