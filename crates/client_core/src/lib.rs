pub mod artefact;
pub mod notifications;
pub mod reducer;
pub mod seed;
pub mod store;
pub mod views;

pub use artefact::{generate_consent_artefact, one_month_after, CONSENT_CONDITIONS};
pub use notifications::{
    notification_for, Notification, NotificationCenter, NotificationConfig, NotificationKind,
};
pub use reducer::{reduce, reduce_at, try_reduce, try_reduce_at};
pub use seed::initial_connection;
pub use store::ConnectionStore;
pub use views::{
    available_controls, providing, receiving, selectable_resources, ObligationControls,
    ObligationSummary,
};
