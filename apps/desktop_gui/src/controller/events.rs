//! UI/backend events and error modeling for desktop GUI controller.

use client_core::StoriesAction;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    TermLoaded(String),
    Stories {
        generation: u64,
        action: StoriesAction,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    TermStore,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "Startup",
            UiErrorContext::TermStore => "Storage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
