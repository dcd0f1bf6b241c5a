//! Entity definitions

pub mod cdn;
pub mod change_log;
pub mod parameter;
pub mod profile;
pub mod profile_parameter;
pub mod snapshot;
