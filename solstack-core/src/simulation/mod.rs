pub mod builder;
pub mod electrical;
pub mod engine;
pub mod optical;
pub mod optimizer;
pub mod stack;
