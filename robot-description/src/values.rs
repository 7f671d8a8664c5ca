//! Attribute value formatting.
//!
//! Coordinates, axes, colors and joint values all end up as attribute
//! strings. Each value is converted on its own (no rounding, no fixed
//! precision) and vectors are joined with a single space.

use crate::constants::VALUE_SEPARATOR;

/// A value that can be written as (part of) an attribute.
pub trait AttrValue {
    /// Returns the attribute text for this value.
    fn to_attr(&self) -> String;
}

// Debug formatting gives the shortest round-trip representation and keeps a
// fractional part on integral values ("0.0", not "0"). Non-finite and
// exponent forms use Rust spelling: "NaN", "inf", "1e-7", "1e16" (not
// "nan" or "1e-07"); URDF/SRDF readers accept either.
impl AttrValue for f64 {
    fn to_attr(&self) -> String {
        format!("{:?}", self)
    }
}

impl AttrValue for f32 {
    fn to_attr(&self) -> String {
        format!("{:?}", self)
    }
}

impl AttrValue for i32 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for i64 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for u8 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for u32 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for u64 {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for usize {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for str {
    fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for String {
    fn to_attr(&self) -> String {
        self.clone()
    }
}

impl<T: AttrValue + ?Sized> AttrValue for &T {
    fn to_attr(&self) -> String {
        (**self).to_attr()
    }
}

/// Joins values into one space-separated attribute string.
///
/// ```
/// use robot_description::join_values;
///
/// assert_eq!(join_values([1, 0, 0, 1]), "1 0 0 1");
/// assert_eq!(join_values([0.5, 0.0, -1.25]), "0.5 0.0 -1.25");
/// ```
pub fn join_values<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AttrValue,
{
    let mut joined = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(VALUE_SEPARATOR);
        }
        joined.push_str(&value.to_attr());
    }
    joined
}
