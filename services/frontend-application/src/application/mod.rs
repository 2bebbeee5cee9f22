pub mod context;

pub const APPLICATION_NAME: &str = "frontend-application";
