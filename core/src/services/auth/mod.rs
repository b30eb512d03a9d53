pub mod service;

pub use service::AuthService;

#[cfg(test)]
mod tests;
