//! MySQL repository implementations.

pub mod identity_provider_impl;
pub mod token_repository_impl;

pub use identity_provider_impl::MySqlIdentityProvider;
pub use token_repository_impl::MySqlTokenRepository;
