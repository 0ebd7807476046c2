pub mod scheduling_record;
pub mod sm2;

pub use scheduling_record::SchedulingRecord;
