//! Synchronous listener fan-out for router state.
//!
//! An explicit ordered list of listener handles. Subscribing delivers the
//! current value right away; every later commit delivers a fresh snapshot to
//! all listeners in subscription order, synchronously, within the committing
//! call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener<T> = Rc<dyn Fn(&T)>;
type ListenerList<T> = Rc<RefCell<Vec<(u64, Listener<T>)>>>;

pub(crate) struct Store<T: Clone + 'static> {
	value: RefCell<T>,
	listeners: ListenerList<T>,
	next_id: Cell<u64>,
}

impl<T: Clone + 'static> Store<T> {
	pub fn new(value: T) -> Self {
		Self {
			value: RefCell::new(value),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_id: Cell::new(0),
		}
	}

	pub fn get(&self) -> T {
		self.value.borrow().clone()
	}

	/// Replaces the value and delivers it to every listener in subscription
	/// order.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		// Handles and value are cloned out first so a listener may read the
		// store or drop its subscription without holding a borrow.
		let listeners: Vec<Listener<T>> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		let value = self.get();
		tracing::trace!(listeners = listeners.len(), "delivering state snapshot");
		for listener in &listeners {
			listener(&value);
		}
	}

	/// Registers a listener and immediately delivers the current value.
	pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		let listener: Listener<T> = Rc::new(listener);
		self.listeners
			.borrow_mut()
			.push((id, Rc::clone(&listener)));

		let current = self.get();
		listener(&current);

		let list = Rc::downgrade(&self.listeners);
		Subscription {
			cancel: Some(Box::new(move || {
				if let Some(list) = list.upgrade() {
					list.borrow_mut().retain(|(lid, _)| *lid != id);
				}
			})),
		}
	}
}

/// Handle returned by [`Store::subscribe`].
///
/// Delivery continues until [`Subscription::unsubscribe`] is called; dropping
/// the handle alone does not remove the listener.
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Removes the listener from the store's delivery list.
	pub fn unsubscribe(mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.cancel.is_some())
			.finish()
	}
}
