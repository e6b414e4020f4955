use std::fmt::Debug;
use std::fs;

/// Linux exposes process information as a virtual filesystem. This trait abstracts the parts
/// of that virtual filesystem we read, to allow it to be mocked.
///
/// All I/O is synchronous and blocking because we expect it to hit a fast path in the OS, given
/// the data is never on a real storage device.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Filesystem: Debug + Send + Sync + 'static {
    /// Gets the contents of the /proc/self/status file for the current process, or `None` if it
    /// cannot be read (e.g. procfs is not mounted inside a container).
    ///
    /// This is a plaintext file with "key:     value" pairs.
    fn get_proc_self_status_contents(&self) -> Option<String>;
}

/// The virtual filesystem for the real operating system that the build is targeting.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetFilesystem;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Filesystem for BuildTargetFilesystem {
    fn get_proc_self_status_contents(&self) -> Option<String> {
        fs::read_to_string("/proc/self/status").ok()
    }
}
