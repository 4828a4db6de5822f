//! Shared helpers for unit tests.



//		Packages

use core::fmt::{Debug, Write as _};
use std::sync::{Arc, Mutex};
use tracing::{
	Event,
	Subscriber,
	field::{Field, Visit},
	subscriber::with_default,
};
use tracing_subscriber::{
	layer::{Context, Layer, SubscriberExt as _},
	registry,
};



//		Structs

//		EventRecorder															
/// Collects the fields of every event emitted while it is installed.
/// 
/// Each event is recorded as a line of `name=value` pairs, with the message
/// under the name `message`.
/// 
#[derive(Clone, Debug, Default)]
pub(crate) struct EventRecorder {
	/// Recorded events, in emission order.
	events: Arc<Mutex<Vec<String>>>,
}

//󰭅		EventRecorder															
impl EventRecorder {
	//		capture																
	/// Runs `f` with a recorder as the thread's default subscriber.
	pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
		let recorder = Self::default();
		let result   = with_default(registry().with(recorder.clone()), f);
		let events   = recorder.events.lock().unwrap().clone();
		(result, events)
	}
}

//󰭅		Layer																	
impl<S: Subscriber> Layer<S> for EventRecorder {
	//		on_event															
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut line = FieldLine::default();
		event.record(&mut line);
		self.events.lock().unwrap().push(line.0);
	}
}

//		FieldLine																
/// Formats visited fields onto one line.
#[derive(Debug, Default)]
struct FieldLine(String);

//󰭅		Visit																	
impl Visit for FieldLine {
	//		record_debug														
	fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
		if !self.0.is_empty() {
			self.0.push(' ');
		}
		write!(self.0, "{}={value:?}", field.name()).unwrap();
	}
}
