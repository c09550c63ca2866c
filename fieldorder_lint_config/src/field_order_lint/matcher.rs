// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use super::types::StructMatch;

// === Struct Matcher DSL === //
pub struct StructMatcher;

impl StructMatcher {
    /// Matches types by fully qualified path, given a regular expression.
    /// e.g. "^shop::model::.*$"
    pub fn name(&self, name: impl Into<String>) -> StructMatchNode {
        StructMatchNode::Leaf(StructMatch::Name(name.into()))
    }

    /// Matches types defined in a crate, given a regular expression.
    /// e.g. "^shop$"
    pub fn in_crate(&self, crate_name: impl Into<String>) -> StructMatchNode {
        StructMatchNode::Leaf(StructMatch::InCrate(crate_name.into()))
    }

    /// Matches every type.
    pub fn any(&self) -> StructMatchNode {
        StructMatchNode::Leaf(StructMatch::Name(".*".into()))
    }
}

#[derive(Clone)]
pub enum StructMatchNode {
    Leaf(StructMatch),
    And(Box<StructMatchNode>, Box<StructMatchNode>),
    Or(Box<StructMatchNode>, Box<StructMatchNode>),
    Not(Box<StructMatchNode>),
}

impl StructMatchNode {
    pub fn and(self, other: StructMatchNode) -> Self {
        StructMatchNode::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: StructMatchNode) -> Self {
        StructMatchNode::Or(Box::new(self), Box::new(other))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        StructMatchNode::Not(Box::new(self))
    }

    // Converts the DSL tree to the actual StructMatch
    pub fn build(self) -> StructMatch {
        match self {
            StructMatchNode::Leaf(matcher) => matcher,
            StructMatchNode::And(a, b) => StructMatch::AndMatches(Box::new(a.build()), Box::new(b.build())),
            StructMatchNode::Or(a, b) => StructMatch::OrMatches(Box::new(a.build()), Box::new(b.build())),
            StructMatchNode::Not(m) => StructMatch::NotMatch(Box::new(m.build())),
        }
    }
}

// Factory function to create a matcher DSL
pub fn matcher<F>(f: F) -> StructMatch
where
    F: FnOnce(&StructMatcher) -> StructMatchNode,
{
    let matcher = StructMatcher;
    let node = f(&matcher);
    node.build()
}
