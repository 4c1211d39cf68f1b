//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rolling_logger::LogBuffer;
use std::sync::Arc;

use crate::auth::{Authenticator, DemoAuthenticator};
use crate::catalog::Catalog;
use crate::config::AppConfig;

/// Read-only app-wide values
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub authenticator: Arc<dyn Authenticator + Send + Sync>,
    /// Recent log records for the diagnostics panel
    pub logs: LogBuffer,
}

impl AppContext {
    pub fn new(config: AppConfig, catalog: Catalog, logs: LogBuffer) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            authenticator: Arc::new(DemoAuthenticator),
            logs,
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Non-blocking notifications. Every page reports through this; nothing
/// uses `window.alert`.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl ToastContext {
    pub fn new(duration_ms: u32) -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        tracing::debug!(id, kind = ?toast.kind, "toast: {}", toast.message);
        self.set_toasts.update(|list| list.push(toast));

        let ctx = *self;
        let duration = self.duration_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            ctx.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
