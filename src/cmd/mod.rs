pub mod encrypt;
pub mod score;
pub mod solve;
