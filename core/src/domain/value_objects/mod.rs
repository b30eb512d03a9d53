pub mod auth_bundle;

pub use auth_bundle::AuthBundle;
