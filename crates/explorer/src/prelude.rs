pub use camino::{FromPathBufError, Utf8Path as Path, Utf8PathBuf as PathBuf};

pub const SECOND: u64 = 1;
