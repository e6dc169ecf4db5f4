pub mod completion;
pub mod metrics_manager;
pub mod pet_catalog;
pub mod relay;
