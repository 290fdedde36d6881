// crates/split_files/src/lib.rs

use std::path::PathBuf;

use extract_file_blocks::{extract_file_blocks, ExtractError};
use write_file_blocks::{BlockSink, WriteError};

pub mod config;
pub mod logging;

/// What to do when a block cannot be written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Record the failure and keep writing the remaining blocks.
    #[default]
    Continue,
    /// Stop at the first failed write.
    FailFast,
}

/// Result of writing one block, in input order.
pub type BlockOutcome = Result<PathBuf, WriteError>;

/// Summary of a [`run`].
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<BlockOutcome>,
    stopped_early: bool,
}

impl RunReport {
    /// Every attempted block, in the order it appeared in the input.
    pub fn outcomes(&self) -> &[BlockOutcome] {
        &self.outcomes
    }

    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &WriteError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    pub fn written_count(&self) -> usize {
        self.written().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// True when [`FailurePolicy::FailFast`] cut the run short.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }
}

/// Extracts every file block from `input` and hands each one to `sink`.
///
/// Blocks are written one at a time in input order, so a later block with
/// the same path overwrites an earlier one. `on_outcome` sees each write's
/// outcome before the next block is written. Write failures are collected in
/// the report; with [`FailurePolicy::FailFast`] the first one ends the run.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyInput`] for empty or whitespace-only input,
/// before anything is written.
pub fn run<S, F>(
    input: &str,
    sink: &mut S,
    policy: FailurePolicy,
    mut on_outcome: F,
) -> Result<RunReport, ExtractError>
where
    S: BlockSink + ?Sized,
    F: FnMut(&BlockOutcome),
{
    let blocks = extract_file_blocks(input)?;
    let mut report = RunReport::default();

    for block in blocks {
        log::debug!("Block {} ({} byte(s))", block.path, block.content.len());
        let outcome = sink.write_block(&block);
        match &outcome {
            Ok(path) => log::info!("Wrote {}", path.display()),
            Err(err) => log::warn!("Failed to write {}: {}", err.path().display(), err),
        }
        on_outcome(&outcome);

        let failed = outcome.is_err();
        report.outcomes.push(outcome);
        if failed && policy == FailurePolicy::FailFast {
            report.stopped_early = true;
            break;
        }
    }

    log::debug!(
        "{} block(s) written, {} failed",
        report.written_count(),
        report.errors().count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract_file_blocks::FileBlock;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Sink that records blocks in memory and fails on the listed paths.
    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, String)>,
        failing: Vec<&'static str>,
    }

    impl BlockSink for MemorySink {
        fn write_block(&mut self, block: &FileBlock<'_>) -> Result<PathBuf, WriteError> {
            let path = PathBuf::from(block.path);
            if self.failing.iter().any(|failing| *failing == block.path) {
                return Err(WriteError::Write {
                    path,
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.files
                .push((block.path.to_string(), write_file_blocks::normalize_content(block.content)));
            Ok(path)
        }
    }

    #[test]
    fn test_run_writes_every_block_in_order() {
        let mut sink = MemorySink::default();
        let report = run("// a.txt\nhello\n// b/c.txt\nworld\n", &mut sink, FailurePolicy::Continue, |_| {})
            .unwrap();

        assert_eq!(report.written_count(), 2);
        assert!(!report.has_errors());
        assert_eq!(
            sink.files,
            vec![
                ("a.txt".to_string(), "hello\n".to_string()),
                ("b/c.txt".to_string(), "world\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_run_rejects_whitespace_input_without_writing() {
        let mut sink = MemorySink::default();
        let err = run("   \n\t\n", &mut sink, FailurePolicy::Continue, |_| {}).unwrap_err();

        assert_eq!(err, ExtractError::EmptyInput);
        assert!(sink.files.is_empty());
    }

    #[test]
    fn test_run_without_markers_writes_nothing() {
        let mut sink = MemorySink::default();
        let report = run("no markers here\n", &mut sink, FailurePolicy::Continue, |_| {}).unwrap();

        assert_eq!(report.written_count(), 0);
        assert!(report.outcomes().is_empty());
        assert!(sink.files.is_empty());
    }

    #[test]
    fn test_continue_policy_keeps_going_after_failure() {
        let mut sink = MemorySink {
            failing: vec!["bad.txt"],
            ..Default::default()
        };
        let input = "// ok1.txt\n1\n// bad.txt\n2\n// ok2.txt\n3\n";
        let report = run(input, &mut sink, FailurePolicy::Continue, |_| {}).unwrap();

        assert_eq!(report.written_count(), 2);
        assert!(report.has_errors());
        assert!(!report.stopped_early());
        assert_eq!(report.outcomes().len(), 3);
        assert!(report.outcomes()[1].is_err());
        let failed: Vec<_> = report.errors().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(failed, vec![PathBuf::from("bad.txt")]);
    }

    #[test]
    fn test_fail_fast_policy_stops_at_first_failure() {
        let mut sink = MemorySink {
            failing: vec!["bad.txt"],
            ..Default::default()
        };
        let input = "// ok1.txt\n1\n// bad.txt\n2\n// ok2.txt\n3\n";
        let report = run(input, &mut sink, FailurePolicy::FailFast, |_| {}).unwrap();

        assert_eq!(report.written_count(), 1);
        assert!(report.stopped_early());
        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.files[0].0, "ok1.txt");
    }

    #[test]
    fn test_duplicate_paths_are_written_in_sequence() {
        let mut sink = MemorySink::default();
        let report = run("// x\nfirst\n// x\nsecond\n", &mut sink, FailurePolicy::Continue, |_| {}).unwrap();

        assert_eq!(report.written_count(), 2);
        assert_eq!(sink.files.last().map(|(_, c)| c.as_str()), Some("second\n"));
    }

    /// Sink that appends a `write <path>` event to a log shared with the caller.
    struct LoggingSink {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl BlockSink for LoggingSink {
        fn write_block(&mut self, block: &FileBlock<'_>) -> Result<PathBuf, WriteError> {
            self.events.borrow_mut().push(format!("write {}", block.path));
            if block.path == "bad.txt" {
                return Err(WriteError::Write {
                    path: PathBuf::from(block.path),
                    source: io::Error::new(io::ErrorKind::Other, "blocked"),
                });
            }
            Ok(PathBuf::from(block.path))
        }
    }

    #[test]
    fn test_each_outcome_is_reported_before_the_next_write() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut sink = LoggingSink {
            events: Rc::clone(&events),
        };
        let input = "// a.txt\n1\n// bad.txt\n2\n// c.txt\n3\n";

        run(input, &mut sink, FailurePolicy::Continue, |outcome| {
            let line = match outcome {
                Ok(path) => format!("ok {}", path.display()),
                Err(err) => format!("err {}", err.path().display()),
            };
            events.borrow_mut().push(line);
        })
        .unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                "write a.txt",
                "ok a.txt",
                "write bad.txt",
                "err bad.txt",
                "write c.txt",
                "ok c.txt",
            ]
        );
    }

    #[test]
    fn test_fail_fast_reports_the_failure_and_nothing_after() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut sink = LoggingSink {
            events: Rc::clone(&events),
        };
        let input = "// bad.txt\n1\n// c.txt\n2\n";

        let report = run(input, &mut sink, FailurePolicy::FailFast, |outcome| {
            events.borrow_mut().push(format!("reported {}", outcome.is_ok()));
        })
        .unwrap();

        assert!(report.stopped_early());
        assert_eq!(*events.borrow(), vec!["write bad.txt", "reported false"]);
    }

    #[test]
    fn test_default_policy_is_continue() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Continue);
    }
}
