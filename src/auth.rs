//! Secret-bearing credentials consumed when authenticated requests are built.

pub mod token;

pub use token::*;
