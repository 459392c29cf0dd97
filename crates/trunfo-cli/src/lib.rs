//! trunfo-cli
//! ==========
//!
//! Command-line interface for the `trunfo-core` card duel.
//!
//! This crate primarily provides a binary (`trunfo`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! trunfo --help
//! trunfo            # full game
//! trunfo --basic    # reduced variant without the SUPER PODER attribute
//! ```
//!
//! For programmatic access to the card model, derivation and comparison
//! rules, use the `trunfo-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
