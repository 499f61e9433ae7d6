// -- Lint policy ---------------------------------------------------------
// Broad groups and allowances live in Cargo.toml `[lints]`; these are the
// restriction lints the crate must never relax locally.

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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Anchored orbit/pan/zoom camera rig for interactive 3D viewports.
//!
//! The rig keeps an invisible anchor at the point the camera looks at.
//! Dragging with the middle button slides the anchor across the view
//! plane, dragging with the right button orbits the camera around it, and
//! the scroll wheel dollies the camera toward or away from it. Every
//! change is applied to a target first and then smoothed toward over
//! subsequent frames.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCameraRig`] - the rig itself
//! - [`camera::CameraRig`] - the host lifecycle it implements
//! - [`input::InputProcessor`] - folds raw window events into per-frame
//!   [`input::FrameInput`] snapshots
//! - [`options::Options`] - sensitivities, projection and frame timing
//!
//! # Frame flow
//!
//! ```
//! use anchorcam::camera::{CameraRig, OrbitCameraRig, Pose};
//! use anchorcam::input::{InputEvent, InputProcessor, MouseButton};
//! use anchorcam::options::Options;
//! use glam::Vec3;
//!
//! let options = Options::default();
//! let camera = Pose::looking_at(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, Vec3::Y);
//! let mut rig = OrbitCameraRig::attached_to(&options.camera, camera);
//! let mut input = InputProcessor::new(options.input.clone());
//!
//! input.handle_event(InputEvent::Resized { width: 800.0, height: 600.0 });
//! input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
//! input.handle_event(InputEvent::Scroll { delta: 1.0 });
//!
//! let frame = input.snapshot();
//! rig.on_frame(&frame, 1.0 / 60.0);
//! rig.on_late_frame(1.0 / 60.0);
//! assert!(rig.distance() < 10.0);
//! ```
//!
//! With the `viewer` feature, [`viewer::Viewer`] drives the rig from a
//! winit window.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{CameraRig, OrbitCameraRig, Pose};
pub use error::RigError;
pub use options::Options;
