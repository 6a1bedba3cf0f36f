pub mod transform;
pub mod trs;
