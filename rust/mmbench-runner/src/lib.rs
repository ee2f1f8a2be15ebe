//! Measurement harness for naive dense matmul.
//!
//! Provides the per-size benchmark step, the fail-fast size sweep, and
//! table/JSON/CSV reporting. The crate installs [`memory::CountingAllocator`]
//! as the global allocator so that every binary linking it (the `mmbench`
//! CLI, the test binaries, the criterion bench) measures heap growth the
//! same way.

pub mod bench;
pub mod memory;
pub mod report;
pub mod result;

#[global_allocator]
static ALLOCATOR: memory::CountingAllocator = memory::CountingAllocator;
