pub mod fuzzy;
pub mod pipeline;
pub mod prefilter;
pub mod rate;
pub mod scoring;
pub mod weights;
