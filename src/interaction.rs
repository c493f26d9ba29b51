//! Outside-click detection for the network dropdown.
//!
//! The view layer decides what counts as "inside" the dropdown's own controls;
//! the controller only asks.

use crate::config::TOGGLE_CLASS_NAMES;

/// What the view knows about the element a click landed on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    class_list: Option<Vec<String>>,
}

impl ClickTarget {
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class_list: Some(classes.into_iter().map(Into::into).collect()),
        }
    }

    /// A target whose classes could not be inspected.
    pub fn opaque() -> Self {
        Self { class_list: None }
    }

    pub fn class_list(&self) -> Option<&[String]> {
        self.class_list.as_deref()
    }
}

pub trait InteractiveRegion {
    /// True when `target` belongs to the dropdown's own controls.
    fn is_inside(&self, target: &ClickTarget) -> bool;
}

impl<F> InteractiveRegion for F
where
    F: Fn(&ClickTarget) -> bool,
{
    fn is_inside(&self, target: &ClickTarget) -> bool {
        self(target)
    }
}

/// Treats clicks on any of a fixed set of class names as inside. Targets without
/// class information count as inside too, so they never dismiss the dropdown.
#[derive(Debug, Clone)]
pub struct ToggleClassAllowList {
    class_names: Vec<String>,
}

impl ToggleClassAllowList {
    pub fn new(class_names: Vec<String>) -> Self {
        Self { class_names }
    }
}

impl Default for ToggleClassAllowList {
    fn default() -> Self {
        Self::new(TOGGLE_CLASS_NAMES.iter().map(|c| c.to_string()).collect())
    }
}

impl InteractiveRegion for ToggleClassAllowList {
    fn is_inside(&self, target: &ClickTarget) -> bool {
        match target.class_list() {
            Some(classes) => classes.iter().any(|class| self.class_names.contains(class)),
            None => true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn toggle_classes_are_inside() {
        let region = ToggleClassAllowList::default();
        assert!(region.is_inside(&ClickTarget::with_classes(["network-caret"])));
        assert!(region.is_inside(&ClickTarget::with_classes(["foo", "menu-icon"])));
        assert!(!region.is_inside(&ClickTarget::with_classes(["app-header"])));
        assert!(!region.is_inside(&ClickTarget::with_classes(Vec::<String>::new())));
    }

    #[test]
    fn opaque_target_is_inside() {
        assert!(ToggleClassAllowList::default().is_inside(&ClickTarget::opaque()));
    }
}
