// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arcball viewpoint controller.
//!
//! Converts 2-D pointer drags over a viewport into a drift-free 3-D orbit of
//! a camera around a fixed focus point, with multiplicative zoom, and
//! produces a right-handed look-at view matrix for a renderer.
//!
//! # Key entry points
//!
//! - [`camera::ArcballController`] - owns the camera state and the drag
//!   state machine
//! - [`camera::sphere::Viewport::screen_to_sphere`],
//!   [`camera::minimal_rotation`], [`camera::compose_and_normalize`] - the
//!   pure building blocks
//! - [`input::InputProcessor`] - turns raw window events into
//!   [`input::ArcballCommand`]s
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Example
//!
//! ```
//! use arcball::camera::ArcballController;
//! use glam::Vec3;
//!
//! let mut controller = ArcballController::new(Vec3::ZERO, 10.0, 800.0, 600.0)?;
//! controller.begin_drag(400.0, 300.0);
//! controller.drag(600.0, 300.0);
//! controller.end_drag();
//! assert!(controller.eye().x > 0.0);
//! let _view = controller.view_matrix();
//! # Ok::<(), arcball::ArcballError>(())
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use error::ArcballError;
