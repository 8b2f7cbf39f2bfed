pub mod navbar;
pub mod resolver;
