mod sample;

pub use sample::{SampleAction, SamplePlugin, greeting};
