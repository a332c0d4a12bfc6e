// Service module exports

pub mod selection_log;
pub mod settings;
