pub mod clock;
pub mod export;
pub mod models;
pub mod review;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::{SchedulingRecord, sm2};
pub use review::ReviewService;
pub use store::{CardId, LearnerId, RecordStore, StoreError};
