//! Request signing
//!
//! The API authenticates each request with an MD5 token computed over the
//! canonical form of its parameters:
//!
//! ```text
//! sig = md5_hex( k1=v1 k2=v2 ... kn=vn secret )   // keys sorted, no separators
//! ```
//!
//! Signing is a pure function of the sorted parameter set and the secret:
//! the same inputs always produce the same 32-character lowercase token,
//! whatever order the parameters were inserted in.

use md5::{Digest, Md5};

use crate::domain::Signature;
use crate::params::ParamSet;

// ============================================================================
// MD5 Hashing
// ============================================================================

/// Compute MD5 of data in one shot
#[inline]
pub fn compute_md5(data: &[u8]) -> Signature {
    Signature::new(Md5::digest(data).into())
}

/// MD5 of a UTF-8 string rendered as lowercase hex
#[inline]
pub fn md5_hex(s: &str) -> String {
    compute_md5(s.as_bytes()).to_hex()
}

// ============================================================================
// Canonicalization and signing
// ============================================================================

/// The exact text that is hashed for `params` and `secret`
///
/// A `sig` entry in `params` is not part of the signed text.
pub fn canonical_string(params: &ParamSet, secret: &str) -> String {
    let mut out = String::new();
    for (key, value) in params.signed_entries() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.push_str(secret);
    out
}

/// Sign a parameter set with the shared secret
pub fn sign(params: &ParamSet, secret: &str) -> Signature {
    // Feed the hasher directly rather than building the canonical string
    let mut hasher = Md5::new();
    for (key, value) in params.signed_entries() {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());
    Signature::new(hasher.finalize().into())
}

/// Sign any collection of pairs; later duplicates replace earlier ones
pub fn sign_pairs<I, K, V>(pairs: I, secret: &str) -> Signature
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    sign(&pairs.into_iter().collect(), secret)
}
