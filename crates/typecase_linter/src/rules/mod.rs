//! Rule implementations.

pub mod naming;

pub use naming::NamingPattern;
