//! Entity definitions for the tables the settlement worker touches

pub mod clubs;
pub mod notifications;
pub mod offers;
pub mod players;
pub mod users;
