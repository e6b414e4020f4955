//! Platform abstraction layer for the wall clock and the process memory probe.
//!
//! The timer registry only talks to the operating system through the [`Platform`] trait. The
//! real implementation targets the build platform, while unit tests swap in a fake whose
//! clock only moves when the test says so.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
#[cfg(target_os = "linux")]
mod linux;
mod real;
#[cfg(windows)]
mod windows;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
#[cfg(target_os = "linux")]
pub(crate) use linux::*;
pub(crate) use real::{BUILD_TARGET_PLATFORM, BuildTargetPlatform};
#[cfg(windows)]
pub(crate) use self::windows::*;
