pub use crate::time::RateExtU32 as _capture_freq_time_RateExtU32;
