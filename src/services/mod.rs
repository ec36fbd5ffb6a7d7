pub mod server;

pub use server::ServerService;
