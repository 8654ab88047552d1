//! Platform directories used by configuration.

pub mod xdg_root;
