pub mod export;
pub mod scheduler;
pub mod series;
pub mod session;
pub mod signal;
pub mod trace_look;
