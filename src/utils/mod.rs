pub mod errors;
pub mod jwt;
pub mod policy;
pub mod pricing;
pub mod validation;
