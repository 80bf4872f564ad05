use std::io;

/// Fixed reporting skeleton: load the source, then process whatever came out
/// of it. Implementations pick the steps; `run` owns the order and may not be
/// overridden usefully.
pub trait Report {
    fn open(&self) -> io::Result<String>;

    /// Overridable step. Defaults to the byte length of the loaded data.
    fn process(&self, data: &str) -> usize {
        data.len()
    }

    fn run(&self) -> io::Result<usize> {
        let data = self.open()?;
        Ok(self.process(&data))
    }
}

/// Report over a file on disk. Only supplies the loading step.
pub struct FileReport {
    path: String,
}

impl FileReport {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Report for FileReport {
    fn open(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::template::{FileReport, Report};

    #[test]
    fn test_file_report_measures_the_file() {
        let report = FileReport::new("./test/report.txt");
        assert_eq!(report.run().unwrap(), 40);
    }

    #[test]
    fn test_missing_file_surfaces_the_error() {
        let report = FileReport::new("./test/absent.txt");
        assert!(report.run().is_err());
    }

    struct LineCountReport;

    impl Report for LineCountReport {
        fn open(&self) -> io::Result<String> {
            Ok("one\ntwo\nthree\n".to_string())
        }

        fn process(&self, data: &str) -> usize {
            data.lines().count()
        }
    }

    // The skeleton must call the override, not the default step.
    #[test]
    fn test_overridden_step_runs_inside_the_skeleton() {
        assert_eq!(LineCountReport.run().unwrap(), 3);
    }
}
