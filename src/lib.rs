//! GPA and CGPA calculation toolkit.
//!
//! The core is a pure calculation API: raw string-typed form inputs go
//! through validation, a fixed letter-grade scale, and a credit-weighted
//! average. The CLI (default) and the optional HTTP JSON API (`web` feature)
//! are thin front ends over [`GradeEngine`].

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "web")]
pub mod api;

pub use crate::core::calculator::{cumulative_gpa, semester_gpa};
pub use crate::core::engine::GradeEngine;
pub use crate::core::scale::{point_for, GRADE_POINTS};
pub use crate::utils::error::{GpaError, Result};

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
