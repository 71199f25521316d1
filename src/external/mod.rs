pub mod share_sheet;

pub use share_sheet::{ShareOutcome, ShareSheet, TracingShareSheet};
