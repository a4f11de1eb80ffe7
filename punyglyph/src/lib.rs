//! Punyglyph generates homoglyph variations of a domain name and keeps
//! only those that are valid internationalized domain names, alongside
//! their punycode form. It is meant for illustrating IDN homograph
//! attacks; it performs no network access.
//!
//! The primary struct to look into is [Domain](./permutate/struct.Domain.html).
//! The [encode](./encode/index.html) module exposes the IDNA transform that
//! decides which variations are kept.
//!
//! ### Example
//!
//! ```
//! use punyglyph::permutate::Domain;
//!
//! let domain = Domain::new("example", "com").unwrap();
//! let generation = domain.homoglyph(2);
//!
//! println!(
//!     "{} variations ({} candidates rejected)",
//!     generation.variants.len(),
//!     generation.rejected
//! );
//!
//! for variant in generation.variants {
//!     println!("{} ({})", variant.display, variant.encoded);
//! }
//! ```
//!
//! Enable the `parallel` feature to encode candidates on a `rayon`
//! thread pool. The output is identical either way.

#![deny(
    future_incompatible,
    nonstandard_style,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]
#![deny(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::decimal_literal_representation,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::explicit_into_iter_loop,
    clippy::explicit_iter_loop,
    clippy::expl_impl_clone_on_copy,
    clippy::fallible_impl_from,
    clippy::manual_filter_map,
    clippy::filter_map_next,
    clippy::manual_find_map,
    clippy::float_arithmetic,
    clippy::get_unwrap,
    clippy::if_not_else,
    clippy::inline_always,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::map_flatten,
    clippy::match_same_arms,
    clippy::maybe_infinite_iter,
    clippy::mem_forget,
    clippy::module_name_repetitions,
    clippy::multiple_inherent_impl,
    clippy::mut_mut,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::map_unwrap_or,
    clippy::path_buf_push_overwrite,
    clippy::print_stdout,
    clippy::redundant_closure_for_method_calls,
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::single_match_else,
    clippy::string_add,
    clippy::string_add_assign,
    clippy::type_repetition_in_bounds,
    clippy::unicode_not_nfc,
    // clippy::unimplemented,
    clippy::unseparated_literal_suffix,
    clippy::used_underscore_binding,
    clippy::wildcard_dependencies,
    // clippy::wildcard_enum_match_arm,
)]
#[macro_use]
extern crate lazy_static;

pub mod constants;
pub mod encode;
pub mod error;
pub mod permutate;

pub use error::Error;
pub use permutate::{generate, Domain, Generation, Variant};
