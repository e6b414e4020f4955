use std::mem;

use tracing::debug;
use windows::Win32::System::ProcessStatus::{GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS};
use windows::Win32::System::Threading::GetCurrentProcess;

const BYTES_PER_KB: usize = 1024;

/// Reads the working set size of the current process, in kilobytes.
///
/// Returns 0 if the operating system refuses to provide the counters.
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) fn process_memory_usage_kb() -> u64 {
    let mut counters = PROCESS_MEMORY_COUNTERS::default();

    let counters_size = u32::try_from(mem::size_of::<PROCESS_MEMORY_COUNTERS>())
        .expect("PROCESS_MEMORY_COUNTERS is a small fixed-size structure");

    // SAFETY: No safety requirements. Does not require closing the handle.
    let current_process = unsafe { GetCurrentProcess() };

    // SAFETY: No safety requirements beyond passing a valid buffer of the declared size.
    let result =
        unsafe { GetProcessMemoryInfo(current_process, &raw mut counters, counters_size) };

    match result {
        Ok(()) => u64::try_from(counters.WorkingSetSize.div_euclid(BYTES_PER_KB))
            .unwrap_or(u64::MAX),
        Err(e) => {
            debug!(error = %e, "process memory counters unavailable; reporting zero memory usage");
            0
        }
    }
}
