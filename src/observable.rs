/// A single-slot reactive container.
///
/// `Observable` holds an optional current value and at most one listener.
/// Every write through [`set_value`](Observable::set_value) invokes the
/// listener synchronously with the new value. Binding replays the current
/// value to the new listener before storing it, so a subscriber always
/// starts from the latest state.
///
/// The type is execution-context agnostic: it performs no locking and no
/// scheduling. The owner is responsible for mutating it from a single
/// context and for hopping to the right context before rendering.
pub struct Observable<T> {
    value: Option<T>,
    listener: Option<Box<dyn FnMut(Option<&T>) + Send>>,
}

impl<T> Observable<T> {
    /// Create a new `Observable` holding `initial`.
    pub fn new(initial: Option<T>) -> Self {
        Observable {
            value: initial,
            listener: None,
        }
    }

    /// Returns the current value without side effects.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Bind a listener to this observable.
    ///
    /// The listener is invoked once, immediately and synchronously, with the
    /// current value (even if absent), then stored. At most one listener is
    /// supported: binding again replaces the previous listener, which is
    /// silently discarded.
    pub fn bind<F>(&mut self, mut listener: F)
    where
        F: FnMut(Option<&T>) + Send + 'static,
    {
        listener(self.value.as_ref());
        self.listener = Some(Box::new(listener));
    }

    /// Store `new_value` and notify the bound listener.
    ///
    /// Fires on every write, in write order, with no equality check, so
    /// writing the same value twice produces two notifications. If no
    /// listener is bound the write is silent.
    pub fn set_value(&mut self, new_value: Option<T>) {
        self.value = new_value;
        if let Some(listener) = &mut self.listener {
            listener(self.value.as_ref());
        }
    }
}
