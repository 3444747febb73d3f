//! Element locators: an immutable (strategy, selector) pair

use std::borrow::Cow;
use std::fmt;

use thirtyfour::By;

/// How a selector string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Id,
    Css,
    XPath,
    ClassName,
    Name,
    Tag,
    LinkText,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Id => "id",
            Strategy::Css => "css selector",
            Strategy::XPath => "xpath",
            Strategy::ClassName => "class name",
            Strategy::Name => "name",
            Strategy::Tag => "tag name",
            Strategy::LinkText => "link text",
        }
    }
}

/// Identifies one or more DOM elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    selector: Cow<'static, str>,
}

impl Locator {
    pub fn new(strategy: Strategy, selector: impl Into<Cow<'static, str>>) -> Self {
        Self {
            strategy,
            selector: selector.into(),
        }
    }

    pub const fn id(selector: &'static str) -> Self {
        Self::borrowed(Strategy::Id, selector)
    }

    pub const fn css(selector: &'static str) -> Self {
        Self::borrowed(Strategy::Css, selector)
    }

    pub const fn xpath(selector: &'static str) -> Self {
        Self::borrowed(Strategy::XPath, selector)
    }

    pub const fn class_name(selector: &'static str) -> Self {
        Self::borrowed(Strategy::ClassName, selector)
    }

    pub const fn name(selector: &'static str) -> Self {
        Self::borrowed(Strategy::Name, selector)
    }

    pub const fn tag(selector: &'static str) -> Self {
        Self::borrowed(Strategy::Tag, selector)
    }

    pub const fn link_text(selector: &'static str) -> Self {
        Self::borrowed(Strategy::LinkText, selector)
    }

    const fn borrowed(strategy: Strategy, selector: &'static str) -> Self {
        Self {
            strategy,
            selector: Cow::Borrowed(selector),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Convert to a WebDriver selector
    pub fn to_by(&self) -> By {
        let selector = self.selector.to_string();
        match self.strategy {
            Strategy::Id => By::Id(selector),
            Strategy::Css => By::Css(selector),
            Strategy::XPath => By::XPath(selector),
            Strategy::ClassName => By::ClassName(selector),
            Strategy::Name => By::Name(selector),
            Strategy::Tag => By::Tag(selector),
            Strategy::LinkText => By::LinkText(selector),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.strategy.as_str(), self.selector)
    }
}

/// Quote `value` as an XPath string literal.
///
/// XPath 1.0 has no escape sequences, so a value holding both quote kinds is
/// spliced together with `concat()`.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}
