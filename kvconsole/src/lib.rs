#![deny(unused_must_use)]

mod error;
pub use error::Error;
use error::decode;

/// Field-sparse generic actions coming from the operator form.
pub mod action;

/// Versioned request schemas for the client endpoints.
pub mod schema;

/// Dispatch of generic actions to the backend.
pub mod gateway;

/// Normalization of backend replies into severity-tagged log lines.
pub mod display;

/// Cluster status polling and topology layout.
pub mod cluster;

/// Backup registry adapter.
pub mod backup;

/// Deployment configuration.
pub mod config;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use action::{ActionKind, FieldName, GenericAction};
use display::{normalize_mutation, normalize_read, ClientResponse, NormalizedResponse};
use schema::{ReadRequest, RemoveRequest, WriteRequest};

pub use config::{ApiGeneration, ConsoleConfig};
