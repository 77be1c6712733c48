//! Stock admin TUI library
//!
//! Exposes the list controller and its pure building blocks for the binary and tests.

pub mod api;
pub mod config;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod location;
pub mod logic;
pub mod model;
pub mod notify;
pub mod utils;

pub use controller::ListController;

/// Fixed number of rows requested per page
pub const PAGE_SIZE: u32 = 20;

/// Sort direction for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Anything other than `asc` reads as descending
    pub fn parse(raw: &str) -> Self {
        if raw == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Card title shown before the message
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Info => "Notice",
            ToastKind::Success => "Done",
            ToastKind::Error => "Error",
        }
    }
}
