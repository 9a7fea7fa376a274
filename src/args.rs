/// Accumulates arguments while a command line is being scanned.
///
/// An argument is "started" as soon as the scanner sees anything that belongs
/// to it, even if nothing has been written yet. That is how `""` ends up as an
/// empty argument instead of no argument at all.
#[derive(Default)]
pub(crate) struct Args {
    done: Vec<String>,
    current: String,
    started: bool,
}

impl Args {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks the current argument as in progress.
    pub(crate) fn start(&mut self) {
        self.started = true;
    }

    /// Appends a character to the current argument.
    pub(crate) fn push(&mut self, c: char) {
        self.started = true;
        self.current.push(c);
    }

    /// Appends a character without starting an argument. Text written this
    /// way stays pending until something else starts the argument.
    pub(crate) fn append(&mut self, c: char) {
        self.current.push(c);
    }

    /// Appends `count` copies of `c`. Writing nothing does not start an argument.
    pub(crate) fn push_n(&mut self, c: char, count: usize) {
        if count == 0 {
            return;
        }
        self.started = true;
        self.current.extend(std::iter::repeat_n(c, count));
    }

    /// Completes the current argument, if one was started.
    pub(crate) fn flush(&mut self) {
        if self.started {
            self.done.push(std::mem::take(&mut self.current));
            self.started = false;
        }
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        self.flush();
        self.done
    }
}
