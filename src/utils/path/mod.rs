//! Path canonicalization.
//!
//! Pure functions over `/`-separated path strings, plus thin filesystem
//! wrappers in [`fs`].
//!
//! - [`slug`]: title → slug (`make_path`, `make_path_to_lower`, `make_title`)
//! - [`split`]: name/extension split (`file_and_ext`, `filename`, `replace_extension`)
//! - [`route`]: output path shapes (`path_prep`, `prettify_path`, `uglify`, `guess_section`)
//! - [`lexical`]: `clean`, `dir`, `join`
//! - [`fs`]: existence checks, disk writes, `abs_pathify`

pub mod fs;
pub mod lexical;
pub mod route;
pub mod slug;
pub mod split;

pub use route::{UrlStyle, guess_section, path_prep, prettify_path, uglify};
pub use slug::{make_path, make_path_to_lower, make_title};
pub use split::{FileAndExt, file_and_ext, filename, replace_extension};
