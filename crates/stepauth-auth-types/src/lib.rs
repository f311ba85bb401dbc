//! Credential types shared by the stepauth issuer and guard.
//!
//! Provides JWT signing and validation, cookie builders, and the
//! `PresentedCredential` extractor.

pub mod cookie;
pub mod credential;
pub mod token;
