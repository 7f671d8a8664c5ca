//! Context-free URDF building blocks.
//!
//! These produce the pre-built pieces [`super::UrdfBuilder`] composes:
//! origins, joint limits, inertials and geometry. None of them carry names,
//! so none of them need a name context.

use crate::node::Element;
use crate::values::{join_values, AttrValue};

/// Builds an `<origin>` from a translation and roll/pitch/yaw rotation.
pub fn origin<P, R>(xyz: P, rpy: R) -> Element
where
    P: IntoIterator,
    P::Item: AttrValue,
    R: IntoIterator,
    R::Item: AttrValue,
{
    Element::new("origin")
        .with_attribute("xyz", join_values(xyz))
        .with_attribute("rpy", join_values(rpy))
}

/// Builds a joint `<limit>` (radians, newton-metres, radians per second).
pub fn limit(lower: f64, upper: f64, effort: f64, velocity: f64) -> Element {
    Element::new("limit")
        .with_attribute("lower", lower.to_attr())
        .with_attribute("upper", upper.to_attr())
        .with_attribute("effort", effort.to_attr())
        .with_attribute("velocity", velocity.to_attr())
}

/// Rotational inertia tensor about the link's center of mass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inertia {
    pub ixx: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyy: f64,
    pub iyz: f64,
    pub izz: f64,
}

impl Inertia {
    /// Creates an inertia with zero products of inertia.
    pub fn diagonal(ixx: f64, iyy: f64, izz: f64) -> Self {
        Inertia {
            ixx,
            iyy,
            izz,
            ..Default::default()
        }
    }

    /// Inertia of a solid box of mass `mass` with edge lengths `size`.
    pub fn solid_box(mass: f64, size: [f64; 3]) -> Self {
        let [x, y, z] = size;
        let k = mass / 12.0;
        Self::diagonal(k * (y * y + z * z), k * (x * x + z * z), k * (x * x + y * y))
    }

    /// Inertia of a solid cylinder along the z axis.
    pub fn solid_cylinder(mass: f64, radius: f64, length: f64) -> Self {
        let side = mass * (3.0 * radius * radius + length * length) / 12.0;
        Self::diagonal(side, side, mass * radius * radius / 2.0)
    }

    fn to_element(self) -> Element {
        Element::new("inertia")
            .with_attribute("ixx", self.ixx.to_attr())
            .with_attribute("ixy", self.ixy.to_attr())
            .with_attribute("ixz", self.ixz.to_attr())
            .with_attribute("iyy", self.iyy.to_attr())
            .with_attribute("iyz", self.iyz.to_attr())
            .with_attribute("izz", self.izz.to_attr())
    }
}

/// Builds an `<inertial>` block: center-of-mass origin, mass and inertia.
pub fn inertial<P, R>(mass: f64, xyz: P, rpy: R, inertia: Inertia) -> Element
where
    P: IntoIterator,
    P::Item: AttrValue,
    R: IntoIterator,
    R::Item: AttrValue,
{
    Element::new("inertial")
        .with_child(origin(xyz, rpy))
        .with_child(Element::new("mass").with_attribute("value", mass.to_attr()))
        .with_child(inertia.to_element())
}

fn geometry(shape: Element) -> Element {
    Element::new("geometry").with_child(shape)
}

/// Builds a `<geometry>` holding a box with edge lengths `size`.
pub fn box_geometry<S>(size: S) -> Element
where
    S: IntoIterator,
    S::Item: AttrValue,
{
    geometry(Element::new("box").with_attribute("size", join_values(size)))
}

/// Builds a `<geometry>` holding a cylinder along the z axis.
pub fn cylinder(radius: f64, length: f64) -> Element {
    geometry(
        Element::new("cylinder")
            .with_attribute("radius", radius.to_attr())
            .with_attribute("length", length.to_attr()),
    )
}

/// Builds a `<geometry>` holding a sphere.
pub fn sphere(radius: f64) -> Element {
    geometry(Element::new("sphere").with_attribute("radius", radius.to_attr()))
}

/// Builds a `<geometry>` holding a mesh file reference, optionally scaled.
pub fn mesh(filename: &str, scale: Option<[f64; 3]>) -> Element {
    let mut mesh = Element::new("mesh").with_attribute("filename", filename);
    if let Some(scale) = scale {
        mesh = mesh.with_attribute("scale", join_values(scale));
    }
    geometry(mesh)
}
