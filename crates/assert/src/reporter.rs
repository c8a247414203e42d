//! Reporting handles: the failure sink the assertions write to.

/// Records assertion failures for the running test.
///
/// Recording a failure never interrupts the caller. Whether and when the test
/// is marked failed is up to the implementation.
pub trait Reporter {
    fn errorf(&mut self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    #[inline]
    fn errorf(&mut self, message: &str) {
        (**self).errorf(message);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    #[inline]
    fn errorf(&mut self, message: &str) {
        (**self).errorf(message);
    }
}

/// In-memory reporter that keeps every failure message.
///
/// Useful as a fake handle when testing code that takes a [`Reporter`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    messages: Vec<String>,
    aborted: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `true` once any failure was recorded or an abort was requested.
    pub fn failed(&self) -> bool {
        self.aborted || !self.messages.is_empty()
    }

    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Marks the recorder as aborted. Does not unwind.
    pub fn fail_now(&mut self) {
        self.aborted = true;
    }
}

impl Reporter for Recorder {
    fn errorf(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// Reporter for plain `#[test]` functions.
///
/// Failures are logged and written to stderr as they happen. The test keeps
/// running; when the reporter is dropped with recorded failures it panics,
/// which fails the test. [`Panicking::fail_now`] panics right away.
#[derive(Debug, Default)]
pub struct Panicking {
    failures: Vec<String>,
}

impl Panicking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Stops the current test by panicking with every failure recorded so far.
    pub fn fail_now(&mut self) -> ! {
        let failures = std::mem::take(&mut self.failures);
        log::error!("aborting test after {} failure(s)", failures.len());
        panic!("{}", summary(&failures));
    }
}

impl Reporter for Panicking {
    fn errorf(&mut self, message: &str) {
        log::error!("{message}");
        eprintln!("{message}");
        self.failures.push(message.to_owned());
    }
}

impl Drop for Panicking {
    fn drop(&mut self) {
        if self.failures.is_empty() || std::thread::panicking() {
            return;
        }
        let failures = std::mem::take(&mut self.failures);
        panic!("{}", summary(&failures));
    }
}

fn summary(failures: &[String]) -> String {
    match failures.len() {
        0 => "test aborted".to_string(),
        1 => format!("assertion failed:\n{}", failures[0]),
        n => format!("{n} assertions failed:\n{}", failures.join("\n\n")),
    }
}
