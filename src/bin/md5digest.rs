//! Print the MD5 digest of a fixed canonical request string
//!
//! The input is the sorted, concatenated parameter set of a
//! `group.getUserGroupsV2` request signed with an empty secret, handy for
//! checking a signer against a known value.

use okprobe::signature::md5_hex;

const INPUT: &str = "application_key=CQIKOELGDIHBABABAcount=5method=group.getUserGroupsV2session_key=12uid=573382458991123";

fn main() {
    println!("MD5 hash of input: {}", md5_hex(INPUT));
}
