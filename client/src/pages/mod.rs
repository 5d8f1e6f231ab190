//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its list signal and route-scoped fetches, and delegates
//! tables, dialogs and charts to `components`.

pub mod alerts;
pub mod announcements;
pub mod assignments;
pub mod collaborators;
pub mod contacts;
pub mod exports;
pub mod home;
pub mod inbox;
pub mod login;
pub mod patients;
pub mod recover_password;
pub mod register;
pub mod reports;
pub mod tambos;
pub mod visits;
