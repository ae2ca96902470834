//! Film profiles: the serialized record, the validated model, named sets of
//! profiles and the per-run overrides applied on top of them.

mod error;
mod model;
mod overrides;
mod record;
mod set;

pub use error::{ProfileError, ProfileSetError};
pub use model::{profile_id, FilmProfile};
pub use overrides::{CurveMode, ParseCurveModeError, RunOverrides};
pub use record::{AdvancedCurveRecord, ColorCurvesRecord, ColorLiteral, CurveRecord, ProfileRecord};
pub use set::{ProfileEntry, ProfileSet};
