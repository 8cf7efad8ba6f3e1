
use crate::model::{Event, TraceMessage};

pub(crate) fn message(groups: &[(&str, Vec<Event>)], tracing: &[(&str, &[&str])]) -> TraceMessage {
    let mut msg = TraceMessage::default();
    for (id, events) in groups {
        msg.events.insert(id.to_string(), events.clone());
    }
    for (target, sources) in tracing {
        msg.tracing_result.insert(
            (*target).into(),
            sources.iter().map(|s| (*s).into()).collect(),
        );
    }
    msg
}
