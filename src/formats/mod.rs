//! Manifest format implementations.
//!
//! Each supported manifest format provides an implementation of the
//! [`ManifestParser`](crate::traits::ManifestParser) trait. The inventory
//! system picks the parser based on the manifest file name; that selection
//! logic lives outside this crate.
//!
//! Currently implemented:
//! - `pip` - pip requirements manifests (`requirements.txt`)

pub mod encoding;
pub mod pip;
