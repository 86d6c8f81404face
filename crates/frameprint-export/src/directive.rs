//! Template directive detection from element names.
//!
//! Under the prefix convention a name such as `loop-products` is split on
//! `-` into a prefix token and a remainder; extra remainder parts are joined
//! with `_` (`if-has-discount` names `has_discount`). Under the sentinel
//! convention only three exact names are recognized.
//!
//! Directives render as Jinja-style tags for the downstream template engine.

use crate::options::DirectiveConvention;
use crate::style::NO_BREAK_MARKER;

const DELIMITER: char = '-';
const PLURAL_MARKER: char = 's';
const ITEM_SUFFIX: &str = "_item";

/// Exact names of the sentinel convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// `{{ project_name }}`
    ProjectName,
    /// `{{ project_description }}`
    ProjectDescription,
    /// `{{#images}}`
    ImageGallery,
}

/// Template directive attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    None,
    /// Repeat the first visible child once per item of `collection`.
    Loop { collection: String, item: String },
    /// Emit the element only when `variable` is truthy.
    Conditional { variable: String },
    /// Replace the element's content or image source with `variable`.
    Variable { variable: String },
    Sentinel(Sentinel),
}

impl Directive {
    /// Detect the directive of an element name.
    pub fn parse(name: &str, convention: DirectiveConvention) -> Self {
        match convention {
            DirectiveConvention::Prefix => Self::parse_prefix(name),
            DirectiveConvention::Sentinel => Self::parse_sentinel(name),
        }
    }

    fn parse_prefix(name: &str) -> Self {
        let name = name.replace(NO_BREAK_MARKER, "");
        let mut tokens = name.trim().split(DELIMITER);
        let prefix = tokens.next().unwrap_or_default();
        let variable = tokens
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        if variable.is_empty() {
            return Directive::None;
        }

        match prefix {
            "loop" => Directive::Loop { item: singular(&variable), collection: variable },
            "if" => Directive::Conditional { variable },
            "var" => Directive::Variable { variable },
            _ => Directive::None,
        }
    }

    fn parse_sentinel(name: &str) -> Self {
        match name.trim() {
            "{{ project_name }}" => Directive::Sentinel(Sentinel::ProjectName),
            "{{ project_description }}" => Directive::Sentinel(Sentinel::ProjectDescription),
            "{{#images}}" => Directive::Sentinel(Sentinel::ImageGallery),
            _ => Directive::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Directive::None)
    }
}

/// Item variable name for a collection: `products` -> `product`, `data` -> `data_item`.
pub fn singular(collection: &str) -> String {
    match collection.strip_suffix(PLURAL_MARKER) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}{}", collection, ITEM_SUFFIX),
    }
}

/// `{{ variable }}`
pub fn placeholder(variable: &str) -> String {
    format!("{{{{ {} }}}}", variable)
}

/// Wrap `body` in a for-loop over `collection`.
pub fn wrap_loop(item: &str, collection: &str, body: &str) -> String {
    format!("{{% for {} in {} %}}{}{{% endfor %}}", item, collection, body)
}

/// Wrap `body` in a conditional on `variable`.
pub fn wrap_conditional(variable: &str, body: &str) -> String {
    format!("{{% if {} %}}{}{{% endif %}}", variable, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(name: &str) -> Directive {
        Directive::parse(name, DirectiveConvention::Prefix)
    }

    #[test]
    fn test_loop_prefix() {
        assert_eq!(
            prefix("loop-products"),
            Directive::Loop { collection: "products".into(), item: "product".into() }
        );
        assert_eq!(
            prefix("loop-featured-products"),
            Directive::Loop { collection: "featured_products".into(), item: "featured_product".into() }
        );
        assert_eq!(
            prefix("loop-data"),
            Directive::Loop { collection: "data".into(), item: "data_item".into() }
        );
    }

    #[test]
    fn test_if_and_var_prefixes() {
        assert_eq!(prefix("if-has-discount"), Directive::Conditional { variable: "has_discount".into() });
        assert_eq!(prefix(" var-title "), Directive::Variable { variable: "title".into() });
        assert_eq!(
            prefix("var-cover [no-break]"),
            Directive::Variable { variable: "cover".into() }
        );
    }

    #[test]
    fn test_unrecognized_names() {
        assert!(prefix("Card").is_none());
        assert!(prefix("header-left").is_none());
        assert!(prefix("loop").is_none());
        assert!(prefix("loop-").is_none());
        assert!(prefix("LOOP-items").is_none());
        assert!(prefix("{{ project_name }}").is_none());
    }

    #[test]
    fn test_sentinel_convention() {
        let sentinel = |name| Directive::parse(name, DirectiveConvention::Sentinel);
        assert_eq!(sentinel("{{ project_name }}"), Directive::Sentinel(Sentinel::ProjectName));
        assert_eq!(
            sentinel(" {{ project_description }} "),
            Directive::Sentinel(Sentinel::ProjectDescription)
        );
        assert_eq!(sentinel("{{#images}}"), Directive::Sentinel(Sentinel::ImageGallery));
        assert!(sentinel("loop-products").is_none());
    }

    #[test]
    fn test_singular() {
        assert_eq!(singular("items"), "item");
        assert_eq!(singular("s"), "s_item");
        assert_eq!(singular("news"), "new");
    }

    #[test]
    fn test_rendering() {
        assert_eq!(placeholder("title"), "{{ title }}");
        assert_eq!(wrap_loop("product", "products", "<p></p>"), "{% for product in products %}<p></p>{% endfor %}");
        assert_eq!(wrap_conditional("sale", "<p></p>"), "{% if sale %}<p></p>{% endif %}");
    }
}
