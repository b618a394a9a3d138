pub mod dispatch;
pub mod object;
