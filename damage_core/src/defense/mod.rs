//! Defense - armor and hits-to-kill

mod armor;

pub use armor::{apply_armor, hits_to_kill};
