// The single gate in front of the console. Every component writes through
// `Output::write_with`, which holds the lock for exactly one closure call.
// Callers must not sleep, fetch or read input inside the closure.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct Output {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Output {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Output {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        // A panicking writer leaves the sink itself usable.
        self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run one write under the lock and flush before releasing it.
    pub fn write_with<T>(&self, f: impl FnOnce(&mut dyn Write) -> io::Result<T>) -> io::Result<T> {
        let mut sink = self.lock();
        let value = f(sink.as_mut())?;
        sink.flush()?;
        Ok(value)
    }

    /// Write `text` followed by a newline.
    pub fn line(&self, text: &str) -> io::Result<()> {
        self.write_with(|w| writeln!(w, "{text}"))
    }
}

/// In-memory sink whose clones share one buffer, so the text written through
/// an `Output` can be read back afterwards.
#[derive(Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<u8>>>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            // One byte at a time so unguarded writers would interleave.
            self.0.lock().unwrap().push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn concurrent_lines_never_interleave() {
        let buf = Shared::default();
        let out = Output::new(buf.clone());
        thread::scope(|s| {
            for label in ["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"] {
                let out = &out;
                s.spawn(move || {
                    for _ in 0..50 {
                        out.line(label).unwrap();
                    }
                });
            }
        });
        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 150);
        assert!(lines
            .iter()
            .all(|l| matches!(*l, "aaaaaaaaaa" | "bbbbbbbbbb" | "cccccccccc")));
    }

    #[test]
    fn write_with_returns_closure_value() {
        let sink = MemorySink::new();
        let out = Output::new(sink.clone());
        let n = out.write_with(|w| w.write(b"abc")).unwrap();
        assert_eq!(n, 3);
        out.line("def").unwrap();
        assert_eq!(sink.contents(), "abcdef\n");
    }
}
