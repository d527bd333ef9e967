//! Attendance roster and its refresh scheduler.
//!
//! The roster is a read-through cache of server state for today's date:
//! every successful refresh replaces it wholesale, never merges. The
//! scheduler keeps it current on a fixed period and accepts out-of-band
//! refresh triggers from successful submissions.

mod client;
mod scheduler;

pub use client::{AttendanceClient, AttendanceRecord, FetchError};
pub use scheduler::SyncScheduler;
