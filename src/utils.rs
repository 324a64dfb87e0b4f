pub mod errorfmt;
pub mod event_listener;
