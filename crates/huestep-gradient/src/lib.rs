//! Linear color gradients between two hex colors.
//!
//! Colors are accepted as `RRGGBB` or `RGB` shorthand, with or without a
//! leading `#`. Interpolation runs on per-channel magnitudes in `[0.0, 1.0]`
//! and each interior step is encoded back to lowercase hex by truncation.
//!
//! ```rust
//! use huestep_gradient::interpolate;
//!
//! let steps = interpolate("#000000", "#ffffff", 3).unwrap();
//! assert_eq!(steps, ["3f3f3f", "7f7f7f", "bfbfbf"]);
//! ```

pub mod hex;
pub mod steps;

pub use hex::{
    from_magnitudes, from_magnitudes_prefixed, normalize, normalize_prefixed, parse, to_magnitudes,
};
pub use steps::{gradient, interpolate, step_count};
