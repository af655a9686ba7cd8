mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::EditUserDialog;
pub use intent::EditUserIntent;
pub use reducer::EditUserReducer;
pub use state::{EditTarget, EditUserOutcome, EditUserState, UserDraft};
