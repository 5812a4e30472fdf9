//! Declarative schemas the host runtime consumes to render the two nodes.
//!
//! Per-field visibility rules (which parameters show for which message
//! type) live in the host; these schemas only declare the fields, their
//! wire names, and requiredness.

use schemars::{Schema, schema_for};

use crate::config::ProviderConfig;
use crate::item::SendParams;

/// Parameter schema for the send node.
pub fn send_parameters() -> Schema {
    schema_for!(SendParams)
}

/// Shape of the configuration object the provider config node attaches to
/// each item.
pub fn provider_config() -> Schema {
    schema_for!(ProviderConfig)
}
