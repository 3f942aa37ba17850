//! End-to-end tests for the registration flow.
//!
//! A small driver executes machine commands the way the page controller
//! does, but against a backend chosen per test and with ticks delivered
//! by hand.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wahire_web::registration::{
    FlowCommand, FlowEvent, FlowTimings, Notice, RegistrationBackend, RegistrationDraft,
    RegistrationError, RegistrationMachine, SimulatedBackend, Step, RESEND_FAILED_MESSAGE,
    SEND_FAILED_MESSAGE, VERIFY_FAILED_MESSAGE,
};

// ============================================================================
// Test Helpers
// ============================================================================

struct Driver<B> {
    machine: RegistrationMachine,
    backend: B,
    notices: Vec<Notice>,
    countdown_restarts: usize,
    pending_reset: Option<Duration>,
}

impl<B: RegistrationBackend> Driver<B> {
    fn new(backend: B) -> Self {
        Self {
            machine: RegistrationMachine::new(FlowTimings::default()),
            backend,
            notices: Vec::new(),
            countdown_restarts: 0,
            pending_reset: None,
        }
    }

    async fn send(&mut self, event: FlowEvent) {
        let mut queue = vec![event];
        while let Some(event) = queue.pop() {
            for command in self.machine.decide(event) {
                if let Some(next) = self.execute(command).await {
                    queue.push(next);
                }
            }
        }
    }

    async fn execute(&mut self, command: FlowCommand) -> Option<FlowEvent> {
        match command {
            FlowCommand::SendCode(draft) => Some(match self.backend.initiate(&draft).await {
                Ok(()) => FlowEvent::SendSucceeded(draft),
                Err(e) => FlowEvent::SendFailed {
                    reason: e.to_string(),
                },
            }),
            FlowCommand::VerifyCode { phone, otp } => {
                Some(match self.backend.verify(&phone, &otp).await {
                    Ok(()) => FlowEvent::VerifySucceeded,
                    Err(e) => FlowEvent::VerifyFailed {
                        reason: e.to_string(),
                    },
                })
            }
            FlowCommand::ResendCode { phone } => {
                let result = self.backend.resend(&phone).await;
                Some(match result {
                    Ok(()) => FlowEvent::ResendSucceeded { phone },
                    Err(e) => FlowEvent::ResendFailed {
                        reason: e.to_string(),
                    },
                })
            }
            FlowCommand::RestartCountdown => {
                self.countdown_restarts += 1;
                None
            }
            FlowCommand::Notify(notice) => {
                self.notices.push(notice);
                None
            }
            FlowCommand::ScheduleReset(delay) => {
                self.pending_reset = Some(delay);
                None
            }
        }
    }

    async fn fill_phone_form(&mut self, name: &str, phone: &str) {
        self.send(FlowEvent::NameChanged(name.to_string())).await;
        self.send(FlowEvent::PhoneChanged(phone.to_string())).await;
    }

    async fn run_out_countdown(&mut self) {
        while self.machine.is_counting_down() {
            self.send(FlowEvent::Tick).await;
        }
    }
}

fn instant_backend() -> SimulatedBackend {
    SimulatedBackend::new(Duration::ZERO)
}

/// Backend that fails every call and counts attempts
#[derive(Default)]
struct FailingBackend {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RegistrationBackend for FailingBackend {
    async fn initiate(&self, _draft: &RegistrationDraft) -> Result<(), RegistrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RegistrationError::Rejected {
            status: 503,
            message: "carrier unavailable".into(),
        })
    }

    async fn verify(&self, _phone: &str, _otp: &str) -> Result<(), RegistrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RegistrationError::Rejected {
            status: 400,
            message: "code expired".into(),
        })
    }

    async fn resend(&self, _phone: &str) -> Result<(), RegistrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RegistrationError::Rejected {
            status: 429,
            message: "too many requests".into(),
        })
    }
}

/// Succeeds on initiate, fails afterwards
struct FlakyAfterSendBackend;

#[async_trait]
impl RegistrationBackend for FlakyAfterSendBackend {
    async fn initiate(&self, _draft: &RegistrationDraft) -> Result<(), RegistrationError> {
        Ok(())
    }

    async fn verify(&self, _phone: &str, _otp: &str) -> Result<(), RegistrationError> {
        Err(RegistrationError::Validation("wrong code".into()))
    }

    async fn resend(&self, _phone: &str) -> Result<(), RegistrationError> {
        Err(RegistrationError::Validation("blocked".into()))
    }
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_full_registration_flow() {
    let mut driver = Driver::new(instant_backend());
    driver.send(FlowEvent::Started).await;
    assert_eq!(driver.countdown_restarts, 1);

    driver.fill_phone_form("Asha Rao", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;

    let state = driver.machine.state();
    assert_eq!(state.step, Step::Otp);
    assert_eq!(state.sent_to(), Some("9876543210"));
    assert_eq!(state.countdown_seconds, 30);
    assert!(!state.can_resend);
    assert!(!state.is_submitting);
    assert_eq!(driver.notices[0].title, "OTP Sent");
    assert_eq!(driver.countdown_restarts, 2);

    driver.send(FlowEvent::OtpChanged("123456".into())).await;
    driver.send(FlowEvent::SubmitOtp).await;
    assert_eq!(driver.notices[1].title, "Registration Successful");
    assert_eq!(driver.pending_reset, Some(Duration::from_secs(2)));

    driver.send(FlowEvent::ResetElapsed).await;
    let state = driver.machine.state();
    assert_eq!(state.step, Step::Phone);
    assert!(state.phone_form.name.is_empty());
    assert!(state.phone_form.phone.is_empty());
    assert!(state.otp_form.otp.is_empty());
    assert!(state.draft.is_none());
}

#[tokio::test]
async fn test_resend_after_countdown_expires() {
    let mut driver = Driver::new(instant_backend());
    driver.fill_phone_form("Asha", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;

    driver.send(FlowEvent::Resend).await;
    assert_eq!(driver.notices.len(), 1, "resend before expiry must do nothing");

    driver.run_out_countdown().await;
    assert!(driver.machine.state().can_resend);

    driver.send(FlowEvent::Resend).await;
    let state = driver.machine.state();
    assert_eq!(state.countdown_seconds, 300);
    assert!(!state.can_resend);
    assert_eq!(
        driver.notices.last().unwrap().description,
        "A new verification code has been sent to 9876543210"
    );
}

#[tokio::test]
async fn test_resend_is_refused_between_verification_and_reset() {
    let mut driver = Driver::new(instant_backend());
    driver.fill_phone_form("Asha", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;
    driver.run_out_countdown().await;

    driver.send(FlowEvent::OtpChanged("123456".into())).await;
    driver.send(FlowEvent::SubmitOtp).await;
    driver.send(FlowEvent::Resend).await;
    driver.send(FlowEvent::SubmitOtp).await;
    driver.send(FlowEvent::ResetElapsed).await;

    let titles: Vec<_> = driver.notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["OTP Sent", "Registration Successful"]);
    let state = driver.machine.state();
    assert_eq!(state.step, Step::Phone);
    assert_eq!(state.countdown_seconds, 0);
    assert_eq!(driver.countdown_restarts, 1);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_delay_elapses_before_otp_step() {
    let mut driver = Driver::new(SimulatedBackend::default());
    driver.fill_phone_form("Asha", "9876543210").await;

    let started = tokio::time::Instant::now();
    driver.send(FlowEvent::SubmitPhone).await;

    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(driver.machine.state().step, Step::Otp);
}

// ============================================================================
// Validation gates
// ============================================================================

#[tokio::test]
async fn test_invalid_input_never_reaches_backend() {
    let backend = FailingBackend::default();
    let calls = backend.calls.clone();
    let mut driver = Driver::new(backend);

    driver.fill_phone_form("A", "12345").await;
    driver.send(FlowEvent::SubmitPhone).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let state = driver.machine.state();
    assert_eq!(state.step, Step::Phone);
    assert!(state.error.is_none());
    assert_eq!(state.phone_errors.len(), 2);
}

#[tokio::test]
async fn test_phone_input_is_shaped_before_validation() {
    let mut driver = Driver::new(instant_backend());
    driver.fill_phone_form("Asha", "(987) 654-3210 ext 9").await;

    assert_eq!(driver.machine.state().phone_form.phone, "9876543210");
    driver.send(FlowEvent::SubmitPhone).await;
    assert_eq!(driver.machine.state().step, Step::Otp);
}

#[tokio::test]
async fn test_non_numeric_otp_is_rejected() {
    let mut driver = Driver::new(instant_backend());
    driver.fill_phone_form("Asha", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;

    driver.send(FlowEvent::OtpChanged("12a456".into())).await;
    driver.send(FlowEvent::SubmitOtp).await;

    let state = driver.machine.state();
    assert_eq!(state.step, Step::Otp);
    assert!(state.otp_errors.contains_key("otp"));
    assert_eq!(driver.notices.len(), 1);
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn test_dispatch_failure_surfaces_alert() {
    let mut driver = Driver::new(FailingBackend::default());
    driver.fill_phone_form("Asha", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;

    let state = driver.machine.state();
    assert_eq!(state.step, Step::Phone);
    assert_eq!(state.error.as_deref(), Some(SEND_FAILED_MESSAGE));
    assert!(!state.is_submitting);
    assert!(driver.notices.is_empty());
}

#[tokio::test]
async fn test_verify_and_resend_failures_surface_alerts() {
    let mut driver = Driver::new(FlakyAfterSendBackend);
    driver.fill_phone_form("Asha", "9876543210").await;
    driver.send(FlowEvent::SubmitPhone).await;

    driver.send(FlowEvent::OtpChanged("123456".into())).await;
    driver.send(FlowEvent::SubmitOtp).await;
    assert_eq!(driver.machine.state().error.as_deref(), Some(VERIFY_FAILED_MESSAGE));
    assert_eq!(driver.machine.state().step, Step::Otp);
    assert!(driver.pending_reset.is_none());

    driver.run_out_countdown().await;
    driver.send(FlowEvent::Resend).await;
    let state = driver.machine.state();
    assert_eq!(state.error.as_deref(), Some(RESEND_FAILED_MESSAGE));
    assert!(state.can_resend);
}
