pub mod english;
pub mod swedish;
