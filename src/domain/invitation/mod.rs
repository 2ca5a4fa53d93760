//! Worker invitation aggregate

pub mod model;
pub mod repository;

pub use model::{
    reminder_cutoff, InvitationStatus, ReminderNotification, WorkerInvitation,
    REMINDER_COOLDOWN_HOURS, REMINDER_NOTIFICATION_KIND,
};
pub use repository::InvitationRepository;
