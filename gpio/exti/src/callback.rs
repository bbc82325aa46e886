//! Subscriber callbacks
//!
//! A callback is a plain function pointer plus an opaque, non-owning
//! [`Context`] handed back on every invocation. Both are stored by value in
//! the subscription table, so nothing borrows from the subscriber's stack.

use core::fmt;

/// Function invoked in interrupt context when a subscribed line triggers.
///
/// Runs to completion inside the vector handler and must not block.
pub type Handler = fn(Context);

/// Opaque context passed back to a [`Handler`].
///
/// The table never dereferences it. Whoever builds a context from a pointer
/// is responsible for keeping the pointee alive until the subscription is
/// released.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context(*mut ());

// SAFETY: the pointer is an opaque token; it is only dereferenced by the
// handler that was registered together with it.
unsafe impl Send for Context {}
unsafe impl Sync for Context {}

impl Context {
    /// Context carrying no data
    pub const NULL: Context = Context(core::ptr::null_mut());

    /// Context pointing at a value that lives for the rest of the program
    pub fn from_static<T: Sync>(value: &'static T) -> Self {
        Context(value as *const T as *mut ())
    }

    /// Context carrying a raw pointer
    pub fn from_ptr<T>(ptr: *mut T) -> Self {
        Context(ptr.cast())
    }

    /// Context carrying a plain integer tag
    pub fn from_usize(tag: usize) -> Self {
        Context(tag as *mut ())
    }

    pub fn as_ptr(self) -> *mut () {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// Reinterpret the context as a shared reference.
    ///
    /// # Safety
    ///
    /// The context must have been built from a valid `T` that is still alive
    /// for `'a`, e.g. through [`Context::from_static`].
    pub unsafe fn as_ref<'a, T>(self) -> &'a T {
        &*(self.0 as *const T)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context({:p})", self.0)
    }
}

/// A registered handler together with its context
#[derive(Debug, Clone, Copy)]
pub struct Callback {
    pub handler: Handler,
    pub context: Context,
}

impl Callback {
    pub const fn new(handler: Handler, context: Context) -> Self {
        Self { handler, context }
    }

    /// Call the handler with its context
    pub fn invoke(self) {
        (self.handler)(self.context)
    }
}
