#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use super::GlCapabilityRequirement;

/// Element type of a limit, which decides the glGet* entry point used to query it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum GlValueType {
    /// glGetIntegerv
    Integer,
    /// glGetInteger64v
    Integer64,
    /// glGetFloatv
    Float,
    /// glGetBooleanv
    Boolean,
}

/// The shape of a limit's value, fixed when the descriptor table is written
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum GlLimitShape {
    Scalar(GlValueType),
    /// A fixed number of elements returned by a single query, i.e. GL_MAX_VIEWPORT_DIMS
    FixedArray(GlValueType, usize),
    /// glGetString
    Text,
}

/// Static description of one implementation limit
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct GlLimitDescriptor {
    pub name: &'static str,
    pub query_id: u32,
    pub shape: GlLimitShape,
    pub requirement: GlCapabilityRequirement,
}

impl GlLimitDescriptor {
    pub const fn new(
        name: &'static str,
        query_id: u32,
        shape: GlLimitShape,
        requirement: GlCapabilityRequirement,
    ) -> Self {
        GlLimitDescriptor {
            name,
            query_id,
            shape,
            requirement,
        }
    }
}

/// A value reported by the driver for a limit
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum GlLimitValue {
    Integer(i32),
    Integer64(i64),
    Float(f32),
    Boolean(bool),
    IntegerArray(Vec<i32>),
    Integer64Array(Vec<i64>),
    FloatArray(Vec<f32>),
    BooleanArray(Vec<bool>),
    Text(String),
}

impl GlLimitValue {
    /// Integer-valued limits widened to i64, for callers that don't care which glGet* was used
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            GlLimitValue::Integer(value) => Some(value as i64),
            GlLimitValue::Integer64(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            GlLimitValue::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            GlLimitValue::Boolean(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GlLimitValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
