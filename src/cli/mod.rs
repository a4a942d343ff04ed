//! Terminal front end for the trust commands

pub mod allocate;
pub mod dashboard;
pub mod deed;
pub mod form;
pub mod plan;
pub mod risk;
pub mod setup;
pub mod ui;
