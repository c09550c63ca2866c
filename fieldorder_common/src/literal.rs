// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

//! Field usage of a single struct literal, in source order.

/// The key of a keyed literal element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralKey {
    /// A plain field name: an identifier, or a tuple index such as `0`.
    Ident(String),
    /// Anything we can't read as a field name.
    Other,
}

impl LiteralKey {
    pub fn from_name(name: &str) -> Self {
        if is_identifier(name) || is_tuple_index(name) {
            LiteralKey::Ident(name.to_string())
        } else {
            LiteralKey::Other
        }
    }
}

// Rust identifier rules: XID_Start or `_`, then XID_Continue; `_` alone is not a name
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    name != "_" && chars.all(unicode_ident::is_xid_continue)
}

fn is_tuple_index(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'))
}

/// One element of a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralElement {
    /// A bare value, e.g. an argument of `Point(1, 2)`.
    Positional,
    /// `key: value`, including the shorthand `key`.
    Keyed(LiteralKey),
}

///
/// Field names used by a named literal, in the order written. Duplicates are
/// kept, and keys that aren't field names show up as empty strings so each
/// name keeps the index of the element it came from.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralFieldUsage {
    names: Vec<String>,
    // Element index in the literal for each entry of `names`.
    positions: Vec<usize>,
}

impl LiteralFieldUsage {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the literal element the `i`th name came from.
    pub fn position(&self, i: usize) -> Option<usize> {
        self.positions.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Keeps the names for which `keep` holds; positions stay attached.
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let (names, positions) = self
            .names
            .iter()
            .zip(&self.positions)
            .filter(|(name, _)| keep(name))
            .map(|(name, pos)| (name.clone(), *pos))
            .unzip();
        Self { names, positions }
    }
}

impl<S: Into<String>> FromIterator<S> for LiteralFieldUsage {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let names: Vec<String> = iter.into_iter().map(Into::into).collect();
        let positions = (0..names.len()).collect();
        Self { names, positions }
    }
}

/// What a literal looks like from the point of view of field ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralShape {
    /// No elements at all, e.g. `Unit {}` or `Config { ..Default::default() }`.
    Empty,
    /// Positional elements; these are bound to declaration order already.
    Unnamed,
    Named(LiteralFieldUsage),
}

impl LiteralShape {
    ///
    /// Classifies a literal from its elements.
    ///
    /// A literal is named when its first element is keyed. Literals are never
    /// supposed to mix the two styles, but we don't take that on faith: a
    /// positional element anywhere makes the whole literal unnamed.
    ///
    pub fn classify<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = LiteralElement>,
    {
        let elements: Vec<LiteralElement> = elements.into_iter().collect();

        match elements.first() {
            None => return LiteralShape::Empty,
            Some(LiteralElement::Positional) => return LiteralShape::Unnamed,
            Some(LiteralElement::Keyed(_)) => {}
        }

        if elements.iter().any(|e| *e == LiteralElement::Positional) {
            tracing::debug!("literal mixes keyed and positional elements; treating it as unnamed");
            return LiteralShape::Unnamed;
        }

        LiteralShape::Named(
            elements
                .into_iter()
                .map(|element| match element {
                    LiteralElement::Keyed(LiteralKey::Ident(name)) => name,
                    _ => String::new(),
                })
                .collect(),
        )
    }
}
