// Domain layer: schema node records and the XDM property contract.

pub mod model;
pub mod property;
