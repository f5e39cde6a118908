//! Strict dotted-decimal IPv4 validation.
//!
//! ```
//! use ipv4_check::{is_ipv4, is_valid_ipv4};
//! use serde_json::json;
//!
//! assert!(is_ipv4(" 192.168.1.1 "));
//! assert!(!is_ipv4("192.168.01.1"));
//! assert_eq!(is_valid_ipv4(&json!("10.0.0.1")), Ok(true));
//! assert!(is_valid_ipv4(&json!(12345)).is_err());
//! ```

pub mod error;
pub mod validator;

pub use error::InvalidType;
pub use validator::{is_ipv4, is_valid_ipv4};
