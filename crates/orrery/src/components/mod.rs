pub mod body;
pub mod star;
