pub mod authenticator;
pub mod authority;
pub mod clock;
pub mod factory;
pub mod scope;
pub mod static_authority;
pub mod types;
pub mod valkey_authority;

pub use authenticator::BearerAuthenticator;
pub use authority::{AuthorityError, AuthorityFailurePolicy, TokenAuthority};
pub use clock::{Clock, FixedClock, SystemClock};
pub use factory::build_authenticator;
pub use scope::RequiredScopes;
pub use static_authority::StaticTokenAuthority;
pub use types::{AccessToken, AuthInfo};
pub use valkey_authority::ValkeyTokenAuthority;
