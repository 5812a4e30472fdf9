//! wasend core: credential projection and outbound request construction
//! for multi-provider WhatsApp sends.
//!
//! The crate is a pure mapping layer. Given a provider, its projected
//! credentials, and a resolved message, it produces the fully formed HTTP
//! request for that provider's API. The only effectful piece is the
//! [`Transport`] implementation that executes the request; everything else
//! is synchronous and stateless.

pub mod builders;
pub mod content;
pub mod credentials;
pub mod errors;
pub mod provider;
pub mod request;
pub mod transport;

pub use builders::build_request;
pub use content::{
    ListContent, ListRow, ListSection, MediaKind, MediaMessage, MessageContent, MessageKind,
};
pub use credentials::{
    CredentialBag, EvolutionCredentials, OfficialCredentials, ProviderCredentials,
    ZapiCredentials,
};
pub use errors::SendError;
pub use provider::ApiProvider;
pub use request::RequestDescriptor;
pub use transport::{HttpTransport, Transport};
