// ABOUTME: Library root for sessiongate - session button controllers for
// ABOUTME: container lock services. Polls status, gates clicks, renders state.

pub mod config;
pub mod control;
pub mod status;
pub mod types;
pub mod view;
