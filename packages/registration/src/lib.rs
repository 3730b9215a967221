//! Flowt pre-registration workflow
//!
//! Holds the form draft, validates it, and submits it to the registration
//! service. The crate has no UI dependency; a page shell forwards field edits
//! and submit events and renders whatever notice comes back.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowt_registration::{
//!     Field, HttpRegistrationClient, RegistrationConfig, RegistrationWorkflow, SUCCESS_NOTICE,
//! };
//!
//! let client = HttpRegistrationClient::new(RegistrationConfig::default())?;
//! let workflow = RegistrationWorkflow::new(client);
//!
//! workflow.edit(Field::Name, "Jane Doe");
//! workflow.edit(Field::Email, "jane@x.com");
//! workflow.edit(Field::Phone, "9876543210");
//! workflow.edit(Field::Occupation, "Business Owner");
//!
//! match workflow.submit().await {
//!     Ok(()) => println!("{SUCCESS_NOTICE}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod validation;
pub mod workflow;

pub use client::{HttpRegistrationClient, RegistrationClient};
pub use config::{RegistrationConfig, DEFAULT_ENDPOINT};
pub use draft::{Field, Occupation, RegistrationDraft};
pub use error::{ConfigError, RegistrationError, Result, UnknownOccupation, ValidationError};
pub use validation::Registration;
pub use workflow::{PendingSubmission, RegistrationWorkflow, SUCCESS_NOTICE};
