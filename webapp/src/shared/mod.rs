pub mod browser;
pub mod contact;
pub mod storage;
pub mod style;
pub mod theme;
pub mod timers;
