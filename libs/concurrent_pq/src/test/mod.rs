//! Workload type, conformance suite and stress harness shared by the unit tests, the benches
//! and the `stress_tester` binary.


pub use job::Job;
