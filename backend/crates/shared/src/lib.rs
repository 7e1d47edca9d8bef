//! Shared Kernel - vocabulary shared by every bounded context
//!
//! - Unified application error and its HTTP classification
//! - Typed integer identifiers for store-assigned keys
//!
//! Only things with the same meaning in every context belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
