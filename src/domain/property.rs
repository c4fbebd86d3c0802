use crate::utils::error::Result;
use std::fmt;

/// Transport-ready value: string, number, boolean, null, nested mapping or sequence.
pub type XdmValue = serde_json::Value;

/// String-keyed mapping produced by [`XdmProperty::serialize_to_xdm`].
pub type XdmMap = serde_json::Map<String, XdmValue>;

/// Capability shared by every node of an XDM schema.
///
/// Serializing produces a mapping whose keys are exactly the schema field
/// names currently populated. The call is a pure read: it never fails, never
/// validates and never mutates the node.
pub trait XdmProperty {
    fn serialize_to_xdm(&self) -> XdmMap;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Emitted only when the accessor yields a value.
    Optional,
    /// Part of the schema's required set. Primitive required fields always
    /// yield a value; reference-typed ones may still be unset and are then
    /// reported by validation, never by serialization.
    Required,
}

/// One entry of a node's field table: schema key plus accessor.
pub struct Field<T> {
    pub name: &'static str,
    pub presence: Presence,
    read: fn(&T) -> Option<XdmValue>,
}

impl<T> Field<T> {
    pub const fn optional(name: &'static str, read: fn(&T) -> Option<XdmValue>) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            read,
        }
    }

    pub const fn required(name: &'static str, read: fn(&T) -> Option<XdmValue>) -> Self {
        Self {
            name,
            presence: Presence::Required,
            read,
        }
    }

    pub fn read(&self, node: &T) -> Option<XdmValue> {
        (self.read)(node)
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .finish()
    }
}

/// Schema description of a node: its name and its field table.
///
/// Every implementor gets [`XdmProperty`] from the single generic serializer
/// below, so node types carry data and a table, never serialization code.
pub trait XdmSchema: Sized + 'static {
    const NODE: &'static str;
    const FIELDS: &'static [Field<Self>];

    /// Validate nested nodes. Leaf nodes keep the default.
    fn validate_nested(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: XdmSchema> XdmProperty for T {
    fn serialize_to_xdm(&self) -> XdmMap {
        let mut map = XdmMap::new();
        for field in T::FIELDS {
            if let Some(value) = field.read(self) {
                map.insert(field.name.to_string(), value);
            }
        }
        tracing::trace!(node = T::NODE, keys = map.len(), "serialized xdm node");
        map
    }
}
