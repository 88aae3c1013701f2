// Infrastructure layer: database adapters and process-local coordination.

pub mod locks;
pub mod repositories;
