pub mod quote;
pub mod seed;
