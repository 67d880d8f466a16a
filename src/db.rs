pub mod insert;
pub mod pool;
