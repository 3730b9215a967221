//! Validation, submission and outcome handling for one form session.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::client::RegistrationClient;
use crate::draft::{Field, RegistrationDraft};
use crate::error::{RegistrationError, Result};
use crate::validation::Registration;

/// Notice shown after the service accepts a registration.
pub const SUCCESS_NOTICE: &str = "Registration successful!";

/// Drives the pre-registration form.
///
/// Owns the draft and the in-flight guard. Clones share both, so the page
/// shell can hand a clone to each event handler.
///
/// ```text
/// Idle ─► Validating ─┬─► Invalid ─────────────► Idle
///                     └─► Submitting ─┬─► Succeeded ─► Idle
///                                     └─► Failed ────► Idle
/// ```
#[derive(Debug)]
pub struct RegistrationWorkflow<C> {
    client: Arc<C>,
    draft: Arc<Mutex<RegistrationDraft>>,
    in_flight: Arc<AtomicBool>,
}

impl<C> Clone for RegistrationWorkflow<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            draft: Arc::clone(&self.draft),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<C: RegistrationClient> RegistrationWorkflow<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            draft: Arc::new(Mutex::new(RegistrationDraft::new())),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply a field change forwarded by the page shell.
    pub fn edit(&self, field: Field, value: impl Into<String>) {
        self.draft.lock().set(field, value);
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> RegistrationDraft {
        self.draft.lock().clone()
    }

    /// Whether a submission is between send and outcome.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the guard and validate the draft.
    ///
    /// The returned [`PendingSubmission`] keeps the guard until it is sent
    /// or dropped. No request is made here.
    ///
    /// # Errors
    ///
    /// [`RegistrationError::InFlight`] while another submission holds the
    /// guard, [`RegistrationError::Invalid`] for the first field that fails
    /// its pattern.
    pub fn prepare(&self) -> Result<PendingSubmission<C>> {
        let guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            debug!("Submit ignored, registration already in flight");
            RegistrationError::InFlight
        })?;

        let registration = self.draft.lock().validate().map_err(|e| {
            debug!(field = ?e, "Registration draft failed validation");
            RegistrationError::from(e)
        })?;

        Ok(PendingSubmission {
            client: Arc::clone(&self.client),
            draft: Arc::clone(&self.draft),
            registration,
            _guard: guard,
        })
    }

    /// Validate and send the draft in one step.
    ///
    /// `Ok(())` means the service accepted the registration and the draft
    /// has been reset. On any error the draft is left as it was.
    pub async fn submit(&self) -> Result<()> {
        self.prepare()?.send().await
    }
}

/// A validated registration holding the in-flight guard.
#[derive(Debug)]
pub struct PendingSubmission<C> {
    client: Arc<C>,
    draft: Arc<Mutex<RegistrationDraft>>,
    registration: Registration,
    _guard: InFlightGuard,
}

impl<C: RegistrationClient> PendingSubmission<C> {
    /// Request body that [`PendingSubmission::send`] will post.
    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Issue the request and apply its outcome to the draft.
    ///
    /// The guard is released before the outcome is returned, whichever way
    /// the request ends.
    pub async fn send(self) -> Result<()> {
        let result = self.client.register(&self.registration).await;

        match &result {
            Ok(()) => {
                info!("Pre-registration submitted");
                self.draft.lock().reset();
            }
            Err(RegistrationError::Transport { message }) => {
                warn!(error = %message, "Pre-registration could not reach the service");
            }
            Err(e) => {
                warn!(error = %e, "Pre-registration failed");
            }
        }

        result
    }
}

#[derive(Debug)]
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
