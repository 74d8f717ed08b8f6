pub mod payload;
pub mod response;
pub mod schema;
pub mod template;
