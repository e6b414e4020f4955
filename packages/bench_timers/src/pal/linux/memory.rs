use tracing::debug;

use crate::pal::linux::Filesystem;

const RESIDENT_SET_KEY: &str = "VmRSS:";

/// Reads the resident set size of the current process, in kilobytes.
///
/// Returns 0 if the status file is unreadable or does not contain a well-formed `VmRSS` line.
pub(crate) fn process_memory_usage_kb(filesystem: &impl Filesystem) -> u64 {
    let Some(status) = filesystem.get_proc_self_status_contents() else {
        debug!("/proc/self/status is not readable; reporting zero memory usage");
        return 0;
    };

    parse_resident_set_kb(&status).unwrap_or_else(|| {
        debug!("/proc/self/status has no usable VmRSS line; reporting zero memory usage");
        0
    })
}

// The kernel always reports this value in kB, e.g. "VmRSS:\t    5120 kB".
fn parse_resident_set_kb(status: &str) -> Option<u64> {
    let value = status
        .lines()
        .find_map(|line| line.strip_prefix(RESIDENT_SET_KEY))?;

    let mut parts = value.split_whitespace();
    let amount = parts.next()?;

    match parts.next() {
        None | Some("kB") => amount.parse().ok(),
        Some(_) => None,
    }
}
