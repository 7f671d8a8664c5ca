//! Literal strings required by the URDF/SRDF consuming toolchain.
//!
//! These are matched bit-exactly by ros_control and MoveIt loaders.

/// Transmission type for a single joint driven by a single actuator.
pub const SIMPLE_TRANSMISSION_TYPE: &str = "transmission_interface/SimpleTransmission";

/// Hardware interface exposed by generated transmissions.
pub const EFFORT_JOINT_INTERFACE: &str = "EffortJointInterface";

/// Mechanical reduction of generated transmissions.
pub const MECHANICAL_REDUCTION: &str = "1";

/// Appended to a resolved joint name to name its actuator.
pub const ACTUATOR_SUFFIX: &str = "_actuator";

/// Appended to a resolved joint name to name its transmission.
pub const TRANSMISSION_SUFFIX: &str = "_transmission";

/// Leading character that marks a name as absolute (not prefixed).
pub const ABSOLUTE_MARKER: char = '/';

/// Separator used when joining numeric vectors into one attribute.
pub const VALUE_SEPARATOR: &str = " ";
