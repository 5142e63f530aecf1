pub mod execution;
pub mod exits;
pub mod extinguisher;
pub mod hazard;
pub mod route_scoring;
pub mod scoring;
pub mod snapshot;
