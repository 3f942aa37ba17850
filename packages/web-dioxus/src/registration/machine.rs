//! Registration flow state machine
//!
//! The machine owns the [`FlowState`] of one registration page. UI events go
//! in through [`RegistrationMachine::decide`], which mutates the state and
//! returns the commands the caller must execute (backend calls, countdown
//! restarts, notices, delayed resets). Completed commands report back as
//! events. Nothing here touches timers or the network.

use std::time::Duration;

use tracing::{debug, warn};

use super::validate::{
    sanitize_otp_input, sanitize_phone_input, FieldErrors, OtpForm, PhoneForm, RegistrationDraft,
};

pub const SEND_FAILED_MESSAGE: &str = "Failed to send OTP. Please try again.";
pub const VERIFY_FAILED_MESSAGE: &str = "Invalid OTP. Please try again.";
pub const RESEND_FAILED_MESSAGE: &str = "Failed to resend OTP. Please try again.";

/// Which form is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Phone,
    Otp,
}

/// Countdown durations and post-verification delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    /// Countdown the page starts with before any code is sent
    pub idle_countdown_secs: u32,
    /// Countdown after the first code is sent
    pub dispatch_countdown_secs: u32,
    /// Countdown after a resend
    pub resend_countdown_secs: u32,
    /// How long the success notice stays before the forms reset
    pub reset_delay: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            idle_countdown_secs: 300,
            dispatch_countdown_secs: 30,
            resend_countdown_secs: 300,
            reset_delay: Duration::from_secs(2),
        }
    }
}

/// A toast-worthy message produced by a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything the registration page renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    pub step: Step,
    pub is_submitting: bool,
    /// Code accepted; nothing is submitted until the forms reset
    pub verified: bool,
    pub error: Option<String>,
    pub countdown_seconds: u32,
    pub can_resend: bool,
    pub phone_form: PhoneForm,
    pub phone_errors: FieldErrors,
    pub otp_form: OtpForm,
    pub otp_errors: FieldErrors,
    /// Values of the last successful dispatch
    pub draft: Option<RegistrationDraft>,
}

impl FlowState {
    fn new(timings: &FlowTimings) -> Self {
        Self {
            step: Step::Phone,
            is_submitting: false,
            verified: false,
            error: None,
            countdown_seconds: timings.idle_countdown_secs,
            can_resend: timings.idle_countdown_secs == 0,
            phone_form: PhoneForm::default(),
            phone_errors: FieldErrors::new(),
            otp_form: OtpForm::default(),
            otp_errors: FieldErrors::new(),
            draft: None,
        }
    }

    /// Phone number the current code was sent to
    pub fn sent_to(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.phone.as_str())
    }

    fn set_countdown(&mut self, seconds: u32) {
        self.countdown_seconds = seconds;
        self.can_resend = seconds == 0;
    }
}

/// Inputs to the machine: user actions and completed commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The page mounted; start the idle countdown
    Started,
    NameChanged(String),
    PhoneChanged(String),
    OtpChanged(String),

    SubmitPhone,
    SendSucceeded(RegistrationDraft),
    SendFailed { reason: String },

    SubmitOtp,
    VerifySucceeded,
    VerifyFailed { reason: String },
    /// The post-verification delay elapsed
    ResetElapsed,

    Resend,
    ResendSucceeded { phone: String },
    ResendFailed { reason: String },

    /// One second passed on the countdown
    Tick,
}

/// Side effects requested by the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowCommand {
    SendCode(RegistrationDraft),
    VerifyCode { phone: String, otp: String },
    ResendCode { phone: String },
    /// Replace any running countdown with a fresh one
    RestartCountdown,
    Notify(Notice),
    /// Deliver [`FlowEvent::ResetElapsed`] after the delay
    ScheduleReset(Duration),
}

/// Reducer for one registration flow instance
#[derive(Debug, Clone)]
pub struct RegistrationMachine {
    timings: FlowTimings,
    state: FlowState,
}

impl RegistrationMachine {
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            state: FlowState::new(&timings),
            timings,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn timings(&self) -> &FlowTimings {
        &self.timings
    }

    /// Whether a countdown should keep ticking
    pub fn is_counting_down(&self) -> bool {
        self.state.countdown_seconds > 0
    }

    /// Apply an event and return the commands it requires
    pub fn decide(&mut self, event: FlowEvent) -> Vec<FlowCommand> {
        debug!(?event, step = ?self.state.step, "registration event");
        let state = &mut self.state;

        match event {
            FlowEvent::Started => {
                if state.countdown_seconds > 0 {
                    vec![FlowCommand::RestartCountdown]
                } else {
                    vec![]
                }
            }

            FlowEvent::NameChanged(name) => {
                state.phone_form.name = name;
                state.phone_errors.remove("name");
                vec![]
            }

            FlowEvent::PhoneChanged(raw) => {
                state.phone_form.phone = sanitize_phone_input(&raw);
                state.phone_errors.remove("phone");
                vec![]
            }

            FlowEvent::OtpChanged(raw) => {
                state.otp_form.otp = sanitize_otp_input(&raw);
                state.otp_errors.clear();
                vec![]
            }

            FlowEvent::SubmitPhone => {
                if state.is_submitting || state.step != Step::Phone {
                    return vec![];
                }
                match state.phone_form.to_draft() {
                    Ok(draft) => {
                        state.phone_errors.clear();
                        state.is_submitting = true;
                        state.error = None;
                        vec![FlowCommand::SendCode(draft)]
                    }
                    Err(errors) => {
                        state.phone_errors = errors;
                        vec![]
                    }
                }
            }

            FlowEvent::SendSucceeded(draft) => {
                state.is_submitting = false;
                state.step = Step::Otp;
                state.set_countdown(self.timings.dispatch_countdown_secs);

                let notice = Notice::new(
                    "OTP Sent",
                    format!("A verification code has been sent to {}", draft.phone),
                );
                state.draft = Some(draft);
                vec![FlowCommand::RestartCountdown, FlowCommand::Notify(notice)]
            }

            FlowEvent::SendFailed { reason } => {
                warn!(%reason, "sending verification code failed");
                state.is_submitting = false;
                state.error = Some(SEND_FAILED_MESSAGE.to_string());
                vec![]
            }

            FlowEvent::SubmitOtp => {
                if state.is_submitting || state.verified || state.step != Step::Otp {
                    return vec![];
                }
                let Some(phone) = state.sent_to().map(str::to_string) else {
                    return vec![];
                };
                match state.otp_form.to_code() {
                    Ok(otp) => {
                        state.otp_errors.clear();
                        state.is_submitting = true;
                        state.error = None;
                        vec![FlowCommand::VerifyCode { phone, otp }]
                    }
                    Err(errors) => {
                        state.otp_errors = errors;
                        vec![]
                    }
                }
            }

            FlowEvent::VerifySucceeded => {
                state.is_submitting = false;
                state.verified = true;
                vec![
                    FlowCommand::Notify(Notice::new(
                        "Registration Successful",
                        "Your account has been created successfully!",
                    )),
                    FlowCommand::ScheduleReset(self.timings.reset_delay),
                ]
            }

            FlowEvent::VerifyFailed { reason } => {
                warn!(%reason, "verifying code failed");
                state.is_submitting = false;
                state.error = Some(VERIFY_FAILED_MESSAGE.to_string());
                vec![]
            }

            FlowEvent::ResetElapsed => {
                state.phone_form = PhoneForm::default();
                state.phone_errors.clear();
                state.otp_form = OtpForm::default();
                state.otp_errors.clear();
                state.draft = None;
                state.verified = false;
                state.step = Step::Phone;
                vec![]
            }

            FlowEvent::Resend => {
                if !state.can_resend || state.is_submitting || state.verified {
                    return vec![];
                }
                let Some(phone) = state.sent_to().map(str::to_string) else {
                    return vec![];
                };
                state.is_submitting = true;
                state.error = None;
                vec![FlowCommand::ResendCode { phone }]
            }

            FlowEvent::ResendSucceeded { phone } => {
                state.is_submitting = false;
                if state.step != Step::Otp {
                    debug!(%phone, "resend finished after the flow reset");
                    return vec![];
                }
                state.set_countdown(self.timings.resend_countdown_secs);
                let notice = Notice::new(
                    "OTP Resent",
                    format!("A new verification code has been sent to {}", phone),
                );
                vec![FlowCommand::RestartCountdown, FlowCommand::Notify(notice)]
            }

            FlowEvent::ResendFailed { reason } => {
                warn!(%reason, "resending verification code failed");
                state.is_submitting = false;
                state.error = Some(RESEND_FAILED_MESSAGE.to_string());
                vec![]
            }

            FlowEvent::Tick => {
                if state.countdown_seconds > 0 {
                    state.set_countdown(state.countdown_seconds - 1);
                }
                vec![]
            }
        }
    }
}

impl Default for RegistrationMachine {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}
