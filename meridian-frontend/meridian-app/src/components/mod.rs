pub mod brand;
pub mod footer;
