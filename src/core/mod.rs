pub mod serializer;

pub use crate::domain::property::{XdmMap, XdmProperty, XdmValue};
pub use crate::utils::error::Result;
