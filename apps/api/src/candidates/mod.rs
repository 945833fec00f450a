pub mod handlers;
pub mod profile;
pub mod queries;
pub mod skills;
