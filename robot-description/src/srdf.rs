//! SRDF element factory: planning groups, named states, end effectors and
//! collision exceptions.

use crate::name::{NameContext, NameResolver};
use crate::node::{Element, Node};
use crate::values::AttrValue;

/// Builds SRDF elements with names qualified by a [`NameContext`].
#[derive(Debug, Clone, Default)]
pub struct SrdfBuilder {
    names: NameContext,
}

impl NameResolver for SrdfBuilder {
    fn context(&self) -> &NameContext {
        &self.names
    }
}

impl SrdfBuilder {
    /// Creates a builder that prefixes relative names with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_context(NameContext::new(prefix))
    }

    /// Creates a builder over an existing context.
    pub fn with_context(names: NameContext) -> Self {
        SrdfBuilder { names }
    }

    /// Wraps `elements` in the `<robot>` document root. The name is not resolved.
    pub fn robot<I>(&self, name: &str, elements: I) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Element::new("robot")
            .with_attribute("name", name)
            .with_children(elements)
    }

    /// Builds a planning group spanning the kinematic chain from `base_link`
    /// to `tip_link`.
    pub fn chain_group(&self, name: &str, base_link: &str, tip_link: &str) -> Element {
        Element::new("group")
            .with_child(
                Element::new("chain")
                    .with_attribute("base_link", self.resolve(base_link))
                    .with_attribute("tip_link", self.resolve(tip_link)),
            )
            .with_attribute("name", self.resolve(name))
    }

    /// Builds a named joint configuration for `group`.
    ///
    /// One `<joint>` entry is written per `(joint, value)` pair, in iteration
    /// order. Pass a slice, vector or insertion-ordered map; a `HashMap`
    /// works but its order is arbitrary.
    pub fn group_state<J, K, V>(&self, name: &str, group: &str, joints: J) -> Element
    where
        J: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AttrValue,
    {
        let entries = joints.into_iter().map(|(joint, value)| {
            Element::new("joint")
                .with_attribute("name", self.resolve(joint.as_ref()))
                .with_attribute("value", value.to_attr())
        });

        Element::new("group_state")
            .with_children(entries)
            .with_attribute("name", self.resolve(name))
            .with_attribute("group", self.resolve(group))
    }

    /// Marks `group` as an end effector attached to `parent_link`.
    pub fn end_effector(&self, name: &str, group: &str, parent_link: &str) -> Element {
        Element::new("end_effector")
            .with_attribute("name", self.resolve(name))
            .with_attribute("group", self.resolve(group))
            .with_attribute("parent_link", self.resolve(parent_link))
    }

    /// Disables collision checking between two links.
    ///
    /// `reason` is free text (e.g. `Adjacent`, `Never`) and is written as given.
    pub fn disable_collisions(&self, link1: &str, link2: &str, reason: &str) -> Element {
        Element::new("disable_collisions")
            .with_attribute("link1", self.resolve(link1))
            .with_attribute("link2", self.resolve(link2))
            .with_attribute("reason", reason)
    }
}
