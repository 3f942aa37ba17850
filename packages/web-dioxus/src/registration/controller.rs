//! Runs a [`RegistrationMachine`] inside a Dioxus component

use std::ops::ControlFlow;
use std::time::Duration;

use dioxus::prelude::*;

use super::countdown::{Scheduler, TickFn, Ticker};
use super::machine::{FlowCommand, FlowEvent, FlowState, FlowTimings, RegistrationMachine};
use super::server_fns::{
    resend_registration_code, send_registration_code, verify_registration_code,
};
use crate::components::{use_toasts, ToastContext};
use crate::timing::sleep;

/// Schedules ticks as Dioxus tasks owned by the current scope
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler;

impl Scheduler for TaskScheduler {
    type Handle = Task;

    fn every(&self, period: Duration, mut tick: TickFn) -> Task {
        spawn(async move {
            loop {
                sleep(period).await;
                if tick().is_break() {
                    break;
                }
            }
        })
    }

    fn cancel(&self, handle: Task) {
        handle.cancel();
    }
}

/// Handle to the registration flow of one page
#[derive(Clone, Copy)]
pub struct RegistrationController {
    machine: Signal<RegistrationMachine>,
    ticker: Signal<Ticker<TaskScheduler>>,
    toasts: ToastContext,
}

impl RegistrationController {
    /// Current state, subscribing the caller to changes
    pub fn state(&self) -> FlowState {
        self.machine.read().state().clone()
    }

    /// Feed an event to the machine and run the resulting commands
    pub fn send(mut self, event: FlowEvent) {
        let commands = self.machine.write().decide(event);
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(mut self, command: FlowCommand) {
        match command {
            FlowCommand::SendCode(draft) => {
                spawn(async move {
                    let result =
                        send_registration_code(draft.name.clone(), draft.phone.clone()).await;
                    match result {
                        Ok(()) => self.send(FlowEvent::SendSucceeded(draft)),
                        Err(e) => self.send(FlowEvent::SendFailed {
                            reason: e.to_string(),
                        }),
                    }
                });
            }
            FlowCommand::VerifyCode { phone, otp } => {
                spawn(async move {
                    match verify_registration_code(phone, otp).await {
                        Ok(()) => self.send(FlowEvent::VerifySucceeded),
                        Err(e) => self.send(FlowEvent::VerifyFailed {
                            reason: e.to_string(),
                        }),
                    }
                });
            }
            FlowCommand::ResendCode { phone } => {
                spawn(async move {
                    match resend_registration_code(phone.clone()).await {
                        Ok(()) => self.send(FlowEvent::ResendSucceeded { phone }),
                        Err(e) => self.send(FlowEvent::ResendFailed {
                            reason: e.to_string(),
                        }),
                    }
                });
            }
            FlowCommand::RestartCountdown => {
                let controller = self;
                self.ticker.write().start(move || {
                    controller.send(FlowEvent::Tick);
                    if controller.machine.peek().is_counting_down() {
                        ControlFlow::Continue(())
                    } else {
                        ControlFlow::Break(())
                    }
                });
            }
            FlowCommand::Notify(notice) => self.toasts.push(notice),
            FlowCommand::ScheduleReset(delay) => {
                spawn(async move {
                    sleep(delay).await;
                    self.send(FlowEvent::ResetElapsed);
                });
            }
        }
    }
}

/// Create the registration flow for the calling component.
///
/// The countdown starts once the component is mounted in the browser and
/// is cancelled when the component is dropped.
pub fn use_registration(timings: FlowTimings) -> RegistrationController {
    let toasts = use_toasts();
    let machine = use_signal(|| RegistrationMachine::new(timings));
    let mut ticker = use_signal(|| Ticker::new(TaskScheduler));

    let controller = RegistrationController {
        machine,
        ticker,
        toasts,
    };

    use_effect(move || controller.send(FlowEvent::Started));

    use_drop(move || {
        if let Ok(mut ticker) = ticker.try_write() {
            ticker.stop();
        }
    });

    controller
}
