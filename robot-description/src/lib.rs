//! Robot description builders
//!
//! Typed element factories for the two XML robot description formats used
//! by ROS tooling: URDF (links, joints, materials, transmissions) and SRDF
//! (planning groups, named states, end effectors, collision exceptions).
//!
//! # Overview
//!
//! Each factory is configured once with a [`NameContext`]. Every
//! name-bearing argument is resolved through it: relative names get the
//! context prefix, names starting with `/` are absolute and only lose the
//! slash. Writing a fragment once and instantiating it under several
//! prefixes gives independently named copies in one document without manual
//! string concatenation.
//!
//! ```
//! use robot_description::urdf::UrdfBuilder;
//! use robot_description::xml::print_to_string;
//!
//! let urdf = UrdfBuilder::new("left_");
//! let robot = urdf.robot(
//!     "cell",
//!     [
//!         urdf.virtual_link("/world"),
//!         urdf.virtual_link("base"),
//!         urdf.fixed_joint("mount", "/world", "base", [0.0, 0.5, 0.0], [0, 0, 0]),
//!         urdf.simple_transmission("elbow"),
//!     ],
//! );
//!
//! let xml = print_to_string(&robot).unwrap();
//! assert!(xml.contains(r#"<link name="world" />"#));
//! assert!(xml.contains(r#"<child link="left_base" />"#));
//! assert!(xml.contains(r#"<actuator name="left_elbow_actuator">"#));
//! ```

pub mod constants;
pub mod error;
pub mod name;
pub mod node;
pub mod srdf;
pub mod urdf;
pub mod values;
pub mod xml;

// Re-export commonly used types
pub use error::{Error, Result};
pub use name::{NameContext, NameResolver};
pub use node::{Element, Node};
pub use srdf::SrdfBuilder;
pub use urdf::{JointKind, UrdfBuilder};
pub use values::{join_values, AttrValue};
