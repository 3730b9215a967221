//! Shared helpers for registration integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use flowt_registration::{
    Field, Registration, RegistrationClient, RegistrationError, RegistrationWorkflow, Result,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy)]
enum Reply {
    Accept,
    Status(u16),
    Unreachable,
}

/// In-memory registration service that records every request it receives.
#[derive(Debug)]
pub struct FakeRegistrationService {
    reply: Reply,
    calls: Arc<Mutex<Vec<Registration>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeRegistrationService {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    pub fn accepting() -> Self {
        Self::new(Reply::Accept)
    }

    pub fn responding(status: u16) -> Self {
        Self::new(Reply::Status(status))
    }

    pub fn unreachable() -> Self {
        Self::new(Reply::Unreachable)
    }

    /// Hold every response until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<Registration>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RegistrationClient for FakeRegistrationService {
    async fn register(&self, registration: &Registration) -> Result<()> {
        self.calls.lock().unwrap().push(registration.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.reply {
            Reply::Accept => Ok(()),
            Reply::Status(status) => Err(RegistrationError::ServerRejected { status }),
            Reply::Unreachable => Err(RegistrationError::Transport {
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// Workflow with a valid Business Owner draft already typed in.
pub fn filled_workflow<C: RegistrationClient>(client: C) -> RegistrationWorkflow<C> {
    let workflow = RegistrationWorkflow::new(client);
    workflow.edit(Field::Name, "Jane Doe");
    workflow.edit(Field::Email, "jane@x.com");
    workflow.edit(Field::Phone, "9876543210");
    workflow.edit(Field::Occupation, "Business Owner");
    workflow
}
