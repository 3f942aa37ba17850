//! Registration page: name/phone, then verification code

use dioxus::prelude::*;

use crate::components::{Icon, IconSvg};
use crate::registration::{
    format_time, use_registration, FlowEvent, FlowTimings, Step, OTP_DIGITS,
};
use crate::routes::Route;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500";
const PRIMARY_BUTTON_CLASS: &str = "w-full py-3 bg-green-600 text-white rounded-md hover:bg-green-700 focus:outline-none focus:ring-2 focus:ring-green-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed";

/// Registration page
#[component]
pub fn Register() -> Element {
    let flow = use_registration(FlowTimings::default());
    let state = flow.state();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-green-50 to-white flex items-center justify-center p-4",

            div {
                class: "w-full max-w-md",

                Link {
                    to: Route::Home {},
                    class: "inline-flex items-center text-gray-600 hover:text-black mb-8",
                    IconSvg { icon: Icon::ArrowLeft, class: "h-4 w-4 mr-2" }
                    "Back to Home"
                }

                div {
                    class: "bg-white/70 backdrop-blur border border-gray-100 shadow-md p-8 rounded-2xl",

                    div {
                        class: "text-center mb-8",
                        h1 { class: "text-3xl font-bold mb-2", "Create Your Account" }
                        p { class: "text-gray-600", "Join WaHire and revolutionize your hiring process" }
                    }

                    if let Some(err) = state.error.clone() {
                        div {
                            class: "mb-6 p-3 border border-red-300 text-red-700 rounded text-sm",
                            role: "alert",
                            "{err}"
                        }
                    }

                    match state.step {
                        Step::Phone => rsx! {
                            form {
                                class: "space-y-6",
                                onsubmit: move |_| flow.send(FlowEvent::SubmitPhone),

                                div {
                                    label { class: "block text-sm font-medium text-black mb-2", "Name" }
                                    input {
                                        r#type: "text",
                                        value: "{state.phone_form.name}",
                                        oninput: move |e| flow.send(FlowEvent::NameChanged(e.value())),
                                        placeholder: "Enter your name",
                                        class: INPUT_CLASS,
                                        disabled: state.is_submitting
                                    }
                                    if let Some(msg) = state.phone_errors.get("name") {
                                        p { class: "mt-1 text-sm text-red-600", "{msg}" }
                                    }
                                }

                                div {
                                    label { class: "block text-sm font-medium text-black mb-2", "Phone Number" }
                                    div {
                                        class: "flex",
                                        span {
                                            class: "inline-flex items-center px-3 text-sm text-gray-900 bg-gray-200 border border-r-0 border-gray-300 rounded-l-md",
                                            "+91"
                                        }
                                        input {
                                            r#type: "tel",
                                            inputmode: "numeric",
                                            value: "{state.phone_form.phone}",
                                            oninput: move |e| flow.send(FlowEvent::PhoneChanged(e.value())),
                                            placeholder: "Enter your phone number",
                                            class: "{INPUT_CLASS} rounded-l-none",
                                            disabled: state.is_submitting
                                        }
                                    }
                                    if let Some(msg) = state.phone_errors.get("phone") {
                                        p { class: "mt-1 text-sm text-red-600", "{msg}" }
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    class: PRIMARY_BUTTON_CLASS,
                                    disabled: state.is_submitting,
                                    if state.is_submitting { "Sending OTP..." } else { "Get Verification Code" }
                                }
                            }
                        },
                        Step::Otp => rsx! {
                            form {
                                class: "space-y-6",
                                onsubmit: move |_| flow.send(FlowEvent::SubmitOtp),

                                div {
                                    class: "text-center mb-4",
                                    p { class: "text-sm text-gray-600 mb-1", "Enter the 6-digit code sent to" }
                                    p { class: "font-medium", "{state.sent_to().unwrap_or_default()}" }
                                }

                                div {
                                    class: "flex flex-col items-center",
                                    input {
                                        r#type: "text",
                                        inputmode: "numeric",
                                        autocomplete: "one-time-code",
                                        maxlength: "{OTP_DIGITS}",
                                        value: "{state.otp_form.otp}",
                                        oninput: move |e| flow.send(FlowEvent::OtpChanged(e.value())),
                                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                                        class: "w-48 text-center tracking-[0.5em] text-2xl px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                        disabled: state.is_submitting
                                    }
                                    if let Some(msg) = state.otp_errors.get("otp") {
                                        p { class: "mt-2 text-sm text-red-600", "{msg}" }
                                    }
                                }

                                button {
                                    r#type: "submit",
                                    class: PRIMARY_BUTTON_CLASS,
                                    disabled: state.is_submitting || state.verified,
                                    if state.is_submitting { "Verifying..." } else { "Verify & Register" }
                                }

                                div {
                                    class: "text-center mt-4",
                                    if state.can_resend {
                                        button {
                                            r#type: "button",
                                            class: "text-black underline-offset-4 hover:underline disabled:opacity-50",
                                            disabled: state.is_submitting || state.verified,
                                            onclick: move |_| flow.send(FlowEvent::Resend),
                                            "Resend OTP"
                                        }
                                    } else {
                                        p {
                                            class: "text-gray-500 flex items-center justify-center",
                                            IconSvg { icon: Icon::Timer, class: "mr-2 h-4 w-4" }
                                            "Resend in {format_time(state.countdown_seconds)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
