//! Invitations module: worker invitation reminders

pub mod service;

pub use service::{InvitationService, ReminderReceipt};
