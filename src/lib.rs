// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain layer
pub mod channel;
pub mod message;
pub mod template;

// Rendering
pub mod presentation;
pub mod renderer;
