pub mod audio;
pub mod error;
pub mod lookup;
pub mod sequence;
pub mod transport;
pub mod types;
pub mod view;

pub use error::SearchError;
pub use lookup::{LookupOutcome, classify};
pub use view::{Phase, ViewState};
