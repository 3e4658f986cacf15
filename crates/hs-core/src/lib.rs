//! # hs-core: Foundational Types for the HireShield Engine
//!
//! Every other crate in the workspace depends on `hs-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for identifiers that must be valid.** `JurisdictionCode` is
//!    used by the reference tables, where codes must be non-empty and unique.
//!    Caller-supplied selections stay as plain strings: the engine tolerates
//!    partial and unknown input.
//!
//! 2. **`CanonicalBytes` newtype.** Assessment commitments are computed from
//!    canonical JSON only, so the same assessment always hashes the same way.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with `Z` suffix and
//!    seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hs-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, ValidationError};
pub use identity::{JurisdictionCode, TenantId};
pub use temporal::Timestamp;
