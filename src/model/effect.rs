//! Mutually exclusive effect classes for the interactive box.

use crate::constants::DEFAULT_EFFECTS;

/// The set of effect class names the controller clears before applying one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSet {
    names: Vec<String>,
}

impl EffectSet {
    /// Build a set from class names, dropping duplicates while keeping order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Known effect names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names as `&str`, ready for a class-list removal.
    pub fn as_strs(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Whether `name` is one of the known effects.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of known effects.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no effects are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        Self::new(DEFAULT_EFFECTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_effects() {
        let set = EffectSet::default();
        assert_eq!(set.as_strs(), vec!["bounce", "shake", "flip", "swing"]);
        assert!(set.contains("flip"));
        assert!(!set.contains("spin"));
    }

    #[test]
    fn test_duplicates_dropped() {
        let set = EffectSet::new(["bounce", "shake", "bounce"]);
        assert_eq!(set.len(), 2);
    }
}
