pub mod crop;
pub mod plan;
pub mod resize;
pub mod save;
