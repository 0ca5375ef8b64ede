pub mod readiness;
pub mod roster;
