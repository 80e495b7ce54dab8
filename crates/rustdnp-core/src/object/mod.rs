/// Object header and qualifier octet.
pub mod header;
/// Range-field layouts selected by the range-specifier code.
pub mod range;
/// Static (group, variation) registry.
pub mod registry;

pub use header::{ObjectHeader, PointPrefixCode};
pub use range::RangeField;
pub use registry::{lookup, ObjectType, PointShape};
