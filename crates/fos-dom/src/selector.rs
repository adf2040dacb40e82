//! CSS Selectors
//!
//! Parsing and matching for the selector subset used by DOM queries:
//! type, universal, `#id`, `.class`, attribute selectors with all six
//! matchers and the `i`/`s` flags, the descendant and child combinators,
//! selector lists, and the pseudo-classes `:not()`, `:is()`, `:root`,
//! `:empty`, `:first-child`, `:last-child` and `:only-child`.

use crate::{DomError, DomResult, DomTree, ElementData, NodeData, NodeId};

/// Comma-separated list of complex selectors
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

/// Compound selectors joined by combinators, left to right
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    /// Each compound with the combinator linking it to the previous one.
    /// The first combinator is unused.
    pub parts: Vec<(Combinator, Compound)>,
}

/// Combinator between compound selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
}

/// Simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq)]
pub struct Compound(pub Vec<SelectorComponent>);

/// A component of a selector
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Universal selector *
    Universal,
    /// Type selector (tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr], [attr=value], etc.
    Attribute(AttributeSelector),
    /// Pseudo-class :not(), :root, etc.
    PseudoClass(PseudoClass),
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMatcher {
    /// [attr=value] - exact match
    Exact(String),
    /// [attr~=value] - whitespace-separated list contains
    Contains(String),
    /// [attr|=value] - exact or prefix with hyphen
    DashMatch(String),
    /// [attr^=value] - starts with
    Prefix(String),
    /// [attr$=value] - ends with
    Suffix(String),
    /// [attr*=value] - contains substring
    Substring(String),
}

/// Supported pseudo-classes
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    Not(SelectorList),
    Is(SelectorList),
}

impl AttributeSelector {
    /// Check if an attribute value matches
    pub fn matches(&self, value: Option<&str>) -> bool {
        let (Some(matcher), Some(val)) = (&self.matcher, value) else {
            // [attr] - just check existence
            return self.matcher.is_none() && value.is_some();
        };

        let eq = |a: &str, b: &str| {
            if self.case_insensitive {
                a.eq_ignore_ascii_case(b)
            } else {
                a == b
            }
        };
        let fold = |s: &str| {
            if self.case_insensitive {
                s.to_ascii_lowercase()
            } else {
                s.to_string()
            }
        };

        match matcher {
            AttributeMatcher::Exact(expected) => eq(val, expected),
            AttributeMatcher::Contains(expected) => {
                !expected.is_empty()
                    && !expected.contains(|c: char| c.is_ascii_whitespace())
                    && val.split_ascii_whitespace().any(|w| eq(w, expected))
            }
            AttributeMatcher::DashMatch(expected) => {
                eq(val, expected)
                    || (val.len() > expected.len()
                        && val.is_char_boundary(expected.len())
                        && eq(&val[..expected.len()], expected)
                        && val[expected.len()..].starts_with('-'))
            }
            AttributeMatcher::Prefix(expected) => {
                !expected.is_empty() && fold(val).starts_with(&fold(expected))
            }
            AttributeMatcher::Suffix(expected) => {
                !expected.is_empty() && fold(val).ends_with(&fold(expected))
            }
            AttributeMatcher::Substring(expected) => {
                !expected.is_empty() && fold(val).contains(&fold(expected))
            }
        }
    }
}

impl SelectorList {
    /// Parse a selector list
    pub fn parse(input: &str) -> DomResult<Self> {
        let mut parser = Parser { input, pos: 0 };
        parser.list(false)
    }

    /// Check if the element matches any selector of the list
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        self.0.iter().any(|s| s.matches(tree, id))
    }
}

impl ComplexSelector {
    /// Check if the element matches, walking combinators right to left
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        match self.parts.len() {
            0 => false,
            n => self.matches_at(tree, id, n - 1),
        }
    }

    fn matches_at(&self, tree: &DomTree, id: NodeId, index: usize) -> bool {
        let (combinator, compound) = &self.parts[index];
        if !compound.matches(tree, id) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match combinator {
            Combinator::Child => {
                parent_element(tree, id).is_some_and(|p| self.matches_at(tree, p, index - 1))
            }
            Combinator::Descendant => {
                let mut ancestor = parent_element(tree, id);
                while let Some(a) = ancestor {
                    if self.matches_at(tree, a, index - 1) {
                        return true;
                    }
                    ancestor = parent_element(tree, a);
                }
                false
            }
        }
    }
}

impl Compound {
    /// Check if every component matches the element
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        match tree.element(id) {
            Some(elem) => self.0.iter().all(|c| match_component(c, tree, id, elem)),
            None => false,
        }
    }
}

fn parent_element(tree: &DomTree, id: NodeId) -> Option<NodeId> {
    tree.parent(id).filter(|&p| tree.is_element(p))
}

/// Match a selector component against an element
fn match_component(
    component: &SelectorComponent,
    tree: &DomTree,
    id: NodeId,
    elem: &ElementData,
) -> bool {
    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => elem.tag == *tag,
        SelectorComponent::Id(expected) => elem.id() == Some(expected.as_str()),
        SelectorComponent::Class(class) => elem.classes().any(|c| c == class),
        SelectorComponent::Attribute(attr) => attr.matches(elem.get_attr(&attr.name)),
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(pseudo, tree, id),
    }
}

/// Match a pseudo-class against an element
fn match_pseudo_class(pseudo: &PseudoClass, tree: &DomTree, id: NodeId) -> bool {
    let step = |node: &crate::Node, forward: bool| {
        if forward {
            node.next_sibling
        } else {
            node.prev_sibling
        }
    };
    let element_sibling = |forward: bool| {
        let mut current = tree.get(id).map_or(NodeId::NONE, |n| step(n, forward));
        while let Some(node) = tree.get(current) {
            if node.is_element() {
                return true;
            }
            current = step(node, forward);
        }
        false
    };

    match pseudo {
        PseudoClass::Root => tree.parent(id) == Some(NodeId::ROOT),
        PseudoClass::Empty => tree.children(id).all(|c| match tree.get(c).map(|n| &n.data) {
            Some(NodeData::Text(text)) => text.is_empty(),
            Some(NodeData::Comment(_)) => true,
            _ => false,
        }),
        PseudoClass::FirstChild => !element_sibling(false),
        PseudoClass::LastChild => !element_sibling(true),
        PseudoClass::OnlyChild => !element_sibling(false) && !element_sibling(true),
        PseudoClass::Not(list) => !list.matches(tree, id),
        PseudoClass::Is(list) => list.matches(tree, id),
    }
}

// ============================================================================
// Parsing
// ============================================================================

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip whitespace; returns whether any was skipped
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn error(&self, reason: &'static str) -> DomError {
        DomError::InvalidSelector {
            selector: self.input.to_string(),
            reason,
        }
    }

    fn expect(&mut self, c: char, reason: &'static str) -> DomResult<()> {
        if self.eat(c) { Ok(()) } else { Err(self.error(reason)) }
    }

    fn list(&mut self, nested: bool) -> DomResult<SelectorList> {
        let mut selectors = Vec::new();
        loop {
            self.skip_ws();
            selectors.push(self.complex()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some(')') if nested => break,
                None if !nested => break,
                _ => return Err(self.error("unexpected character")),
            }
        }
        Ok(SelectorList(selectors))
    }

    fn complex(&mut self) -> DomResult<ComplexSelector> {
        let mut parts = vec![(Combinator::Descendant, self.compound()?)];
        loop {
            let had_ws = self.skip_ws();
            let combinator = match self.peek() {
                Some('>') => {
                    self.pos += 1;
                    self.skip_ws();
                    Combinator::Child
                }
                Some(',' | ')') | None => break,
                Some(_) if had_ws => Combinator::Descendant,
                Some(_) => return Err(self.error("unexpected character")),
            };
            parts.push((combinator, self.compound()?));
        }
        Ok(ComplexSelector { parts })
    }

    fn compound(&mut self) -> DomResult<Compound> {
        let mut components = Vec::new();
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                components.push(SelectorComponent::Universal);
            }
            Some(c) if is_ident_char(c) || c == '\\' => {
                components.push(SelectorComponent::Type(self.ident()?.to_ascii_lowercase()));
            }
            _ => {}
        }
        loop {
            let component = match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    SelectorComponent::Id(self.ident()?)
                }
                Some('.') => {
                    self.pos += 1;
                    SelectorComponent::Class(self.ident()?)
                }
                Some('[') => {
                    self.pos += 1;
                    SelectorComponent::Attribute(self.attribute()?)
                }
                Some(':') => {
                    self.pos += 1;
                    SelectorComponent::PseudoClass(self.pseudo_class()?)
                }
                _ => break,
            };
            components.push(component);
        }
        if components.is_empty() {
            return Err(self.error("expected a selector"));
        }
        Ok(Compound(components))
    }

    /// Identifier with backslash escapes taken literally
    fn ident(&mut self) -> DomResult<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.pos += 1;
                out.push(self.bump().ok_or_else(|| self.error("dangling escape"))?);
            } else if is_ident_char(c) {
                self.pos += c.len_utf8();
                out.push(c);
            } else {
                break;
            }
        }
        if out.is_empty() {
            return Err(self.error("expected an identifier"));
        }
        Ok(out)
    }

    fn string(&mut self, quote: char) -> DomResult<String> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('\\') => out.push(self.bump().ok_or_else(|| self.error("dangling escape"))?),
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }

    fn attribute(&mut self) -> DomResult<AttributeSelector> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        if self.eat(']') {
            return Ok(AttributeSelector {
                name,
                matcher: None,
                case_insensitive: false,
            });
        }

        let kind = match self.bump() {
            Some('=') => '=',
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.expect('=', "expected '=' in attribute selector")?;
                c
            }
            _ => return Err(self.error("expected an attribute matcher")),
        };

        self.skip_ws();
        let value = match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.pos += 1;
                self.string(q)?
            }
            _ => self.ident()?,
        };
        self.skip_ws();
        let case_insensitive = match self.peek() {
            Some('i' | 'I') => {
                self.pos += 1;
                true
            }
            Some('s' | 'S') => {
                self.pos += 1;
                false
            }
            _ => false,
        };
        self.skip_ws();
        self.expect(']', "expected ']'")?;

        let matcher = match kind {
            '~' => AttributeMatcher::Contains(value),
            '|' => AttributeMatcher::DashMatch(value),
            '^' => AttributeMatcher::Prefix(value),
            '$' => AttributeMatcher::Suffix(value),
            '*' => AttributeMatcher::Substring(value),
            _ => AttributeMatcher::Exact(value),
        };
        Ok(AttributeSelector {
            name,
            matcher: Some(matcher),
            case_insensitive,
        })
    }

    fn pseudo_class(&mut self) -> DomResult<PseudoClass> {
        let name = self.ident()?.to_ascii_lowercase();
        if self.eat('(') {
            let list = self.list(true)?;
            self.expect(')', "expected ')'")?;
            return match name.as_str() {
                "not" => Ok(PseudoClass::Not(list)),
                "is" | "where" => Ok(PseudoClass::Is(list)),
                _ => Err(self.error("unsupported functional pseudo-class")),
            };
        }
        match name.as_str() {
            "root" => Ok(PseudoClass::Root),
            "empty" => Ok(PseudoClass::Empty),
            "first-child" => Ok(PseudoClass::FirstChild),
            "last-child" => Ok(PseudoClass::LastChild),
            "only-child" => Ok(PseudoClass::OnlyChild),
            _ => Err(self.error("unsupported pseudo-class")),
        }
    }
}
