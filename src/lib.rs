pub mod conditional_paralell;
pub mod config;
pub mod error;
pub mod image_data;
pub mod mask;
pub mod pipeline;
pub mod pixels;
pub mod region;
pub mod rules;
pub mod selection;
