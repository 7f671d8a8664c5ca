//! URDF element factory: links, joints, materials and transmissions.
//!
//! [`UrdfBuilder`] resolves every name-bearing argument through its
//! [`NameContext`] and returns a finished [`Element`]. Pre-built pieces such
//! as inertials, geometry and joint limits come from the context-free
//! helpers in [`parts`], which carry no names of their own.

pub mod parts;

pub use parts::{box_geometry, cylinder, inertial, limit, mesh, origin, sphere, Inertia};

use crate::constants::{
    ACTUATOR_SUFFIX, EFFORT_JOINT_INTERFACE, MECHANICAL_REDUCTION, SIMPLE_TRANSMISSION_TYPE,
    TRANSMISSION_SUFFIX,
};
use crate::name::{NameContext, NameResolver};
use crate::node::{Element, Node};
use crate::values::{join_values, AttrValue};

/// URDF joint kinds produced by [`UrdfBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    /// Rigid connection between two links.
    Fixed,
    /// Hinge with position limits.
    Revolute,
}

impl JointKind {
    /// Returns the value of the joint `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            JointKind::Fixed => "fixed",
            JointKind::Revolute => "revolute",
        }
    }
}

impl std::fmt::Display for JointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds URDF elements with names qualified by a [`NameContext`].
#[derive(Debug, Clone, Default)]
pub struct UrdfBuilder {
    names: NameContext,
}

impl NameResolver for UrdfBuilder {
    fn context(&self) -> &NameContext {
        &self.names
    }
}

impl UrdfBuilder {
    /// Creates a builder that prefixes relative names with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_context(NameContext::new(prefix))
    }

    /// Creates a builder over an existing context.
    pub fn with_context(names: NameContext) -> Self {
        UrdfBuilder { names }
    }

    /// Wraps `elements` in the `<robot>` document root.
    ///
    /// The robot name identifies the whole document and is written as given.
    pub fn robot<I>(&self, name: &str, elements: I) -> Element
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Element::new("robot")
            .with_attribute("name", name)
            .with_children(elements)
    }

    /// Builds a named material with an RGBA color.
    pub fn material<V>(&self, name: &str, rgba: V) -> Element
    where
        V: IntoIterator,
        V::Item: AttrValue,
    {
        Element::new("material")
            .with_child(Element::new("color").with_attribute("rgba", join_values(rgba)))
            .with_attribute("name", self.resolve(name))
    }

    /// Builds a link with inertial, visual and collision blocks.
    ///
    /// `visual` and `collision` are the children of the respective blocks
    /// (typically an origin and a geometry). The visual block additionally
    /// references `material` by resolved name.
    pub fn link<V, C>(
        &self,
        name: &str,
        inertia: impl Into<Node>,
        visual: V,
        collision: C,
        material: &str,
    ) -> Element
    where
        V: IntoIterator,
        V::Item: Into<Node>,
        C: IntoIterator,
        C::Item: Into<Node>,
    {
        let visual = Element::new("visual")
            .with_children(visual)
            .with_child(Element::new("material").with_attribute("name", self.resolve(material)));

        Element::new("link")
            .with_child(inertia)
            .with_child(visual)
            .with_child(Element::new("collision").with_children(collision))
            .with_attribute("name", self.resolve(name))
    }

    /// Builds a link with no physical properties, used as a frame anchor.
    pub fn virtual_link(&self, name: &str) -> Element {
        Element::new("link").with_attribute("name", self.resolve(name))
    }

    /// Builds a fixed joint between `parent` and `child`.
    pub fn fixed_joint<P, R>(&self, name: &str, parent: &str, child: &str, xyz: P, rpy: R) -> Element
    where
        P: IntoIterator,
        P::Item: AttrValue,
        R: IntoIterator,
        R::Item: AttrValue,
    {
        self.joint(JointKind::Fixed, name, parent, child, origin(xyz, rpy))
    }

    /// Builds a revolute joint rotating about `axis`, bounded by `limit`.
    #[allow(clippy::too_many_arguments)]
    pub fn revolute_joint<P, R, A>(
        &self,
        name: &str,
        parent: &str,
        child: &str,
        xyz: P,
        rpy: R,
        axis: A,
        limit: impl Into<Node>,
    ) -> Element
    where
        P: IntoIterator,
        P::Item: AttrValue,
        R: IntoIterator,
        R::Item: AttrValue,
        A: IntoIterator,
        A::Item: AttrValue,
    {
        self.joint(JointKind::Revolute, name, parent, child, origin(xyz, rpy))
            .with_child(Element::new("axis").with_attribute("xyz", join_values(axis)))
            .with_child(limit)
    }

    // Children first, then attributes; both orders are fixed.
    fn joint(
        &self,
        kind: JointKind,
        name: &str,
        parent: &str,
        child: &str,
        origin: Element,
    ) -> Element {
        Element::new("joint")
            .with_child(Element::new("parent").with_attribute("link", self.resolve(parent)))
            .with_child(Element::new("child").with_attribute("link", self.resolve(child)))
            .with_child(origin)
            .with_attribute("name", self.resolve(name))
            .with_attribute("type", kind.as_str())
    }

    /// Builds a ros_control transmission driving `joint_name` with one
    /// effort-controlled actuator.
    ///
    /// The actuator and the transmission are named after the resolved joint
    /// name with `_actuator` and `_transmission` appended.
    pub fn simple_transmission(&self, joint_name: &str) -> Element {
        let joint = self.resolve(joint_name);

        Element::new("transmission")
            .with_child(Element::new("type").with_text(SIMPLE_TRANSMISSION_TYPE))
            .with_child(
                Element::new("joint")
                    .with_child(Element::new("hardwareInterface").with_text(EFFORT_JOINT_INTERFACE))
                    .with_attribute("name", joint.as_str()),
            )
            .with_child(
                Element::new("actuator")
                    .with_child(Element::new("mechanicalReduction").with_text(MECHANICAL_REDUCTION))
                    .with_attribute("name", format!("{joint}{ACTUATOR_SUFFIX}")),
            )
            .with_attribute("name", format!("{joint}{TRANSMISSION_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_of(e: &Element) -> Vec<&str> {
        e.child_elements().map(Element::name).collect()
    }

    #[test]
    fn test_material() {
        let urdf = UrdfBuilder::new("robot_");
        let m = urdf.material("arm", [1, 0, 0, 1]);

        assert_eq!(m.name(), "material");
        assert_eq!(m.attribute("name"), Some("robot_arm"));
        let color = m.find("color").unwrap();
        assert_eq!(color.attribute("rgba"), Some("1 0 0 1"));
    }

    #[test]
    fn test_material_float_channels() {
        let m = UrdfBuilder::default().material("grey", [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(m.attribute("name"), Some("grey"));
        assert_eq!(
            m.find("color").and_then(|c| c.attribute("rgba")),
            Some("0.5 0.5 0.5 1.0")
        );
    }

    #[test]
    fn test_material_absolute_name() {
        let m = UrdfBuilder::new("left_").material("/shared_black", [0, 0, 0, 1]);
        assert_eq!(m.attribute("name"), Some("shared_black"));
    }

    #[test]
    fn test_link_structure() {
        let urdf = UrdfBuilder::new("r_");
        let inertia = inertial(1.0, [0.0; 3], [0.0; 3], Inertia::diagonal(0.1, 0.1, 0.1));
        let link = urdf.link(
            "upper_arm",
            inertia,
            [origin([0, 0, 0], [0, 0, 0]), box_geometry([0.1, 0.1, 0.5])],
            [cylinder(0.05, 0.5)],
            "blue",
        );

        assert_eq!(link.attribute("name"), Some("r_upper_arm"));
        assert_eq!(names_of(&link), vec!["inertial", "visual", "collision"]);

        let visual = link.find("visual").unwrap();
        assert_eq!(names_of(visual), vec!["origin", "geometry", "material"]);
        assert_eq!(
            visual.find("material").and_then(|m| m.attribute("name")),
            Some("r_blue")
        );
        // The material reference carries no color of its own.
        assert!(visual.find("material").unwrap().is_empty());

        let collision = link.find("collision").unwrap();
        assert_eq!(names_of(collision), vec!["geometry"]);
    }

    #[test]
    fn test_link_with_empty_blocks() {
        let link = UrdfBuilder::new("p_").link(
            "l",
            Element::new("inertial"),
            Vec::<Element>::new(),
            Vec::<Element>::new(),
            "/white",
        );
        let visual = link.find("visual").unwrap();
        assert_eq!(names_of(visual), vec!["material"]);
        assert_eq!(
            visual.find("material").and_then(|m| m.attribute("name")),
            Some("white")
        );
        assert!(link.find("collision").unwrap().is_empty());
    }

    #[test]
    fn test_virtual_link() {
        let link = UrdfBuilder::new("r_").virtual_link("tool0");
        assert_eq!(link.name(), "link");
        assert_eq!(link.attributes().collect::<Vec<_>>(), vec![("name", "r_tool0")]);
        assert!(link.is_empty());
    }

    #[test]
    fn test_fixed_joint() {
        let urdf = UrdfBuilder::new("r_");
        let j = urdf.fixed_joint("mount", "/world", "base", [0.0, 0.5, 0.0], [0, 0, 0]);

        assert_eq!(
            j.attributes().collect::<Vec<_>>(),
            vec![("name", "r_mount"), ("type", "fixed")]
        );
        assert_eq!(names_of(&j), vec!["parent", "child", "origin"]);
        assert_eq!(j.find("parent").and_then(|p| p.attribute("link")), Some("world"));
        assert_eq!(j.find("child").and_then(|c| c.attribute("link")), Some("r_base"));

        let o = j.find("origin").unwrap();
        assert_eq!(o.attribute("xyz"), Some("0.0 0.5 0.0"));
        assert_eq!(o.attribute("rpy"), Some("0 0 0"));
    }

    #[test]
    fn test_revolute_joint() {
        let urdf = UrdfBuilder::new("r_");
        let j = urdf.revolute_joint(
            "elbow",
            "upper_arm",
            "forearm",
            [0.0, 0.0, 0.5],
            [0.0, 0.0, 0.0],
            [0, 1, 0],
            limit(-1.5, 1.5, 10.0, 2.0),
        );

        assert_eq!(j.attribute("name"), Some("r_elbow"));
        assert_eq!(j.attribute("type"), Some("revolute"));
        assert_eq!(names_of(&j), vec!["parent", "child", "origin", "axis", "limit"]);
        assert_eq!(j.find("axis").and_then(|a| a.attribute("xyz")), Some("0 1 0"));

        let l = j.find("limit").unwrap();
        assert_eq!(l.attribute("lower"), Some("-1.5"));
        assert_eq!(l.attribute("upper"), Some("1.5"));
    }

    #[test]
    fn test_revolute_joint_passes_limit_through() {
        let custom = Element::new("limit").with_attribute("effort", "anything");
        let j = UrdfBuilder::default().revolute_joint(
            "j", "a", "b", [0; 3], [0; 3], [0, 0, 1], custom.clone(),
        );
        assert_eq!(j.find("limit"), Some(&custom));
    }

    #[test]
    fn test_simple_transmission() {
        let t = UrdfBuilder::new("robot_").simple_transmission("elbow");

        assert_eq!(t.name(), "transmission");
        assert_eq!(t.attribute("name"), Some("robot_elbow_transmission"));
        assert_eq!(names_of(&t), vec!["type", "joint", "actuator"]);
        assert_eq!(
            t.find("type").and_then(Element::text).as_deref(),
            Some("transmission_interface/SimpleTransmission")
        );

        let joint = t.find("joint").unwrap();
        assert_eq!(joint.attribute("name"), Some("robot_elbow"));
        assert_eq!(
            joint.find("hardwareInterface").and_then(Element::text).as_deref(),
            Some("EffortJointInterface")
        );

        let actuator = t.find("actuator").unwrap();
        assert_eq!(actuator.attribute("name"), Some("robot_elbow_actuator"));
        assert_eq!(
            actuator.find("mechanicalReduction").and_then(Element::text).as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_simple_transmission_absolute_joint() {
        let t = UrdfBuilder::new("robot_").simple_transmission("/gripper");
        assert_eq!(t.attribute("name"), Some("gripper_transmission"));
        assert_eq!(
            t.find("actuator").and_then(|a| a.attribute("name")),
            Some("gripper_actuator")
        );
    }

    #[test]
    fn test_robot_name_is_not_resolved() {
        let urdf = UrdfBuilder::new("left_");
        let doc = urdf.robot("workcell", [urdf.virtual_link("base")]);
        assert_eq!(doc.attribute("name"), Some("workcell"));
        assert_eq!(doc.child_elements().count(), 1);
    }

    #[test]
    fn test_joint_kind_strings() {
        assert_eq!(JointKind::Fixed.as_str(), "fixed");
        assert_eq!(JointKind::Revolute.to_string(), "revolute");
    }
}
