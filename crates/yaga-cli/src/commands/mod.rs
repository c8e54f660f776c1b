pub mod dispatch;
pub mod link;
pub mod render;
pub mod schema;
pub mod servers;
