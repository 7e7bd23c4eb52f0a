//! Embedded word list
//!
//! The default anagram corpus compiled into the binary at build time.

// Include the generated word list from the build script
include!(concat!(env!("OUT_DIR"), "/anagram_words.rs"));
