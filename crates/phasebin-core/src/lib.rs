pub mod binarize;
pub mod consts;
pub mod error;
pub mod evaluate;
pub mod frame;
pub mod io;
pub mod reference;
pub mod search;
pub mod spectral;

pub use error::{InvalidScore, PhasebinError, Result};
pub use evaluate::evaluate_candidate;
pub use frame::{Frame, PhaseMap};
pub use search::{search_threshold, search_threshold_configured, SearchConfig, SearchResult};
pub use spectral::encode_phase;
