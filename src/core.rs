pub mod math;
pub mod pipeline;
pub mod screen;
