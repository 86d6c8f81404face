//! Class allocation.
//!
//! Every visited element consumes one ordinal. Only elements with at least
//! one style rule are registered, and only registered ordinals become class
//! attributes and stylesheet blocks.

use std::fmt;

use indexmap::IndexMap;

/// One `property: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub property: &'static str,
    pub value: String,
}

impl StyleRule {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self { property, value: value.into() }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Ordered rules of one element, in extraction order.
pub type RuleList = Vec<StyleRule>;

/// Ordinal assigned to a visited element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

/// Allocates class ordinals and records registered rule sets.
#[derive(Debug, Clone)]
pub struct ClassAllocator {
    prefix: String,
    next: usize,
    rules: IndexMap<ClassId, RuleList>,
}

impl ClassAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0, rules: IndexMap::new() }
    }

    /// Consume the next ordinal, registering `rules` if there are any.
    pub fn allocate(&mut self, rules: RuleList) -> ClassId {
        let id = ClassId(self.next);
        self.next += 1;
        if !rules.is_empty() {
            self.rules.insert(id, rules);
        }
        id
    }

    /// Append rules to an allocated class, registering it if needed.
    pub fn extend(&mut self, id: ClassId, rules: impl IntoIterator<Item = StyleRule>) {
        debug_assert!(id.0 < self.next, "class {} was never allocated", id.0);
        let mut rules = rules.into_iter().peekable();
        if rules.peek().is_none() {
            return;
        }
        self.rules.entry(id).or_default().extend(rules);
    }

    pub fn is_registered(&self, id: ClassId) -> bool {
        self.rules.contains_key(&id)
    }

    /// Class name for an ordinal, registered or not.
    pub fn class_name(&self, id: ClassId) -> String {
        format!("{}{}", self.prefix, id.0)
    }

    /// ` class="..."` for registered ids, empty otherwise.
    pub fn class_attr(&self, id: ClassId) -> String {
        if self.is_registered(id) {
            format!(" class=\"{}\"", self.class_name(id))
        } else {
            String::new()
        }
    }

    /// Number of ordinals consumed so far.
    pub fn allocated(&self) -> usize {
        self.next
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self, id: ClassId) -> Option<&RuleList> {
        self.rules.get(&id)
    }

    /// Registered classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &RuleList)> + '_ {
        self.rules.iter().map(|(id, rules)| (self.class_name(*id), rules))
    }
}

impl Default for ClassAllocator {
    fn default() -> Self {
        Self::new("el-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(value: &str) -> StyleRule {
        StyleRule::new("opacity", value)
    }

    #[test]
    fn test_ordinals_consumed_without_rules() {
        let mut classes = ClassAllocator::default();
        let first = classes.allocate(vec![rule("0.50")]);
        let second = classes.allocate(Vec::new());
        let third = classes.allocate(vec![rule("0.25")]);

        assert_eq!((first, second, third), (ClassId(0), ClassId(1), ClassId(2)));
        assert_eq!(classes.allocated(), 3);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.class_attr(first), " class=\"el-0\"");
        assert_eq!(classes.class_attr(second), "");
    }

    #[test]
    fn test_extend_registers_late() {
        let mut classes = ClassAllocator::new("c");
        let id = classes.allocate(Vec::new());
        classes.extend(id, Vec::new());
        assert!(!classes.is_registered(id));

        classes.extend(id, vec![StyleRule::new("background-size", "cover")]);
        assert!(classes.is_registered(id));
        assert_eq!(classes.class_attr(id), " class=\"c0\"");
    }

    #[test]
    fn test_iteration_in_registration_order() {
        let mut classes = ClassAllocator::default();
        let late = classes.allocate(Vec::new());
        classes.allocate(vec![rule("0.10")]);
        classes.extend(late, vec![rule("0.90")]);

        let names: Vec<String> = classes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["el-1", "el-0"]);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(StyleRule::new("display", "flex").to_string(), "display: flex;");
    }
}
