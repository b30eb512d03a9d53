pub mod identity;
pub mod token;

pub use identity::IdentityProvider;
pub use token::TokenRepository;

pub use identity::MockIdentityProvider;
pub use token::MockTokenRepository;
