//! Utility modules.
//!
//! - [`path`]: slugs, name/extension splitting, output path shapes
//! - [`highlight`]: external code highlighter wrapper
//! - [`exec`]: external command builder

pub mod exec;
pub mod highlight;
pub mod path;
