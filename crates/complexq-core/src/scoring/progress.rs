#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total: u64 },
    ComplexScored,
    BatchFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchStart { total: 3 });
        reporter.report(Progress::BatchFinish);
    }

    #[test]
    fn reporter_forwards_events_to_the_callback() {
        let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                seen.lock().unwrap().push(format!("{:?}", event));
            }));
            reporter.report(Progress::BatchStart { total: 2 });
            reporter.report(Progress::ComplexScored);
            reporter.report(Progress::Message("halfway".to_string()));
            reporter.report(Progress::BatchFinish);
        }

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 4);
        assert!(seen[0].contains("BatchStart"));
        assert!(seen[2].contains("halfway"));
    }
}
