pub mod ping;
pub mod videos;
