//! Cryptanalysis subsystem.
//!
//! Both strategies share the [`scorer`]: a candidate key is accepted when
//! the virtual decryption shows enough sentence boundaries.

pub mod brute_force;
pub mod frequency;
pub mod scorer;
