pub mod grouped;
pub mod match_record;
