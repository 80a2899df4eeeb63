#![cfg(feature = "serde")]

use serde::ser::*;

use crate::color::PackedColor;
use crate::component::Component;
use crate::options::ExecutionStrategy;

impl Serialize for PackedColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PackedColor", 4)?;
        state.serialize_field("r", &self.r)?;
        state.serialize_field("g", &self.g)?;
        state.serialize_field("b", &self.b)?;
        state.serialize_field("a", &self.a)?;
        state.end()
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Alpha => "alpha"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for ExecutionStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            ExecutionStrategy::Scalar => "scalar",
            ExecutionStrategy::Vectorized => "vectorized"
        };
        serializer.serialize_str(name)
    }
}
