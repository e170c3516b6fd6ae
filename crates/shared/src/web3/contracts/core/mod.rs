pub mod artifact;
pub mod contract;
pub mod deployment;
pub mod error;
