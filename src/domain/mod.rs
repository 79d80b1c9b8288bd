// Domain layer - Pure models and display rules
pub mod dashboard;
pub mod display;
pub mod legacy;
pub mod session;
pub mod telemetry;
pub mod timeline;
