mod app_state;
mod error;
mod marketer;

pub use app_state::AppState;
pub use error::ApiError;
pub use marketer::MarketerRecord;
