//! # Random Number Generation
//!
//! Seeded generators for reproducible measurement sampling.
//!
//! - **Reproducibility**: every generator is seeded explicitly; the same seed
//!   always yields the same sequence
//! - **Isolation**: generators are owned locals, never process-wide state
//!
//! ## Module Structure
//!
//! - [`prng`]: [`LabRng`], a seeded wrapper around `rand::rngs::StdRng`
//! - [`seeds`]: per-measurement seed derivation from an [`Identifier`]
//!
//! ## Usage Example
//!
//! ```rust
//! use fakelab_engine::rng::{derive_seeds, LabRng};
//!
//! let seeds = derive_seeds(12345, 3);
//! assert_eq!(seeds, derive_seeds(12345, 3));
//!
//! let mut rng = LabRng::from_seed(seeds[0]);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

mod prng;
mod seeds;

pub use prng::LabRng;
pub use seeds::{derive_seeds, seed_stream, Identifier, SeedStream};
