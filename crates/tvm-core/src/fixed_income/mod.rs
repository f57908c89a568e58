pub mod bonds;
pub mod yields;
