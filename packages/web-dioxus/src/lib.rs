//! WaHire - Dioxus fullstack web application
//!
//! A landing page for the WhatsApp job notifier and a two-step phone
//! registration flow (name/phone, then a six-digit code).

#![allow(non_snake_case)]

pub mod app;
pub mod components;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod landing;
pub mod pages;
pub mod registration;
pub mod routes;
pub mod timing;
