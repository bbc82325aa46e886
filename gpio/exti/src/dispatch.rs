//! Vector demultiplexing
//!
//! A vector entry only says that *some* line in its group fired. Every
//! covered line is checked on each entry, since one entry can stand for
//! several pending lines.

use gpio_core::{Line, LineRouter, Vector};
use log::trace;

use crate::driver::Exti;

impl<R: LineRouter> Exti<R> {
    /// Service all pending lines of `vector`.
    ///
    /// Called from the vector's interrupt handler. Returns the number of
    /// callbacks invoked.
    pub fn on_vector(&self, vector: Vector) -> usize {
        self.on_lines(vector.range())
    }

    /// Service the given lines in the order supplied.
    ///
    /// Line numbers outside the table and lines without a callback are
    /// skipped; both happen legitimately while a release races the vector.
    pub fn on_lines<I>(&self, lines: I) -> usize
    where
        I: IntoIterator<Item = u8>,
    {
        let mut invoked = 0;
        for number in lines {
            if self.service_line(number) {
                invoked += 1;
            }
        }
        invoked
    }

    fn service_line(&self, number: u8) -> bool {
        let Ok(line) = Line::new(number) else {
            return false;
        };

        if !self.router.is_pending(line) {
            return false;
        }

        // Clear before calling out so an edge arriving during the callback
        // latches again and is serviced on the next entry.
        self.router.clear_pending(line);

        match self.table.callback(line) {
            Some(callback) => {
                trace!("{}: dispatch", line);
                callback.invoke();
                true
            }
            None => false,
        }
    }
}
