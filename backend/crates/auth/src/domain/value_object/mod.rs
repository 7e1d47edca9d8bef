//! Value Object Module

pub mod activation_status;
pub mod email;
pub mod person_name;
pub mod session_token;
pub mod user_id;
pub mod user_password;
pub mod user_role;
