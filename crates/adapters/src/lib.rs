pub mod demo_catalog;
pub mod mock;
pub mod synthesizer;

pub use demo_catalog::demo_catalog;
pub use mock::MockDatabase;
pub use synthesizer::synthesize_row;
