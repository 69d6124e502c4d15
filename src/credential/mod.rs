mod bootstrap;
mod gate;

pub use bootstrap::BootstrapEndpoint;
pub use gate::{Credential, CredentialGate};
