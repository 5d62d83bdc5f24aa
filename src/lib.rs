//! pathprep - path canonicalization for static site publishing.
//!
//! Turns titles into slugs, splits paths into name and extension, and
//! rewrites content paths into pretty (`/a/b/index.html`) or ugly
//! (`/a/b.html`) publish paths. Everything in [`utils::path`] except
//! [`utils::path::fs`] is pure string manipulation.
//!
//! ```
//! use pathprep::utils::path::{UrlStyle, make_path_to_lower, path_prep};
//!
//! let slug = make_path_to_lower("My First Post");
//! let out = path_prep(UrlStyle::Pretty, &format!("/blog/{slug}.html"));
//! assert_eq!(out, "/blog/my-first-post/index.html");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod utils;
