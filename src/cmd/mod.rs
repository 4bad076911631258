pub mod evaluate;
pub mod sample;
pub mod validate;
