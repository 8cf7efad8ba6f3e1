//! 输入数据模型
//!
//! 一条 message 由 `events`（按标识符分组的事件）和 `tracingResult`
//! （事件之间的因果关系）组成。

mod event;
mod message;

pub use event::{Event, EventGroup, Uid};
pub use message::{TraceMessage, TracingResult};
