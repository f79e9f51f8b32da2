//! Chunked batch conversion with progress reporting and cancellation.
//!
//! Input is split on `\n`; each chunk goes through the conversion engine on
//! its own and is followed by a newline in the output. Progress is reported
//! as `completed / total` after every chunk.

use crossbeam::channel::{self, Receiver};
use std::path::Path;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

use super::cancel::{CancellationReason, CancellationSource, CancellationToken};
use crate::core::options::ConversionOptions;
use crate::core::scheme::Scheme;
use crate::encoders::algorithms::errors::ConversionError;
use crate::encoders::transform;

/// Splits batch input into chunks. A trailing newline yields a trailing
/// empty chunk; empty input yields no chunks at all.
pub fn split_chunks(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// A configured batch conversion.
pub struct BatchJob<'a> {
    scheme: Scheme,
    options: ConversionOptions,
    on_progress: Option<Box<dyn FnMut(f64) + 'a>>,
    cancel: CancellationToken,
}

impl<'a> BatchJob<'a> {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            options: ConversionOptions::default(),
            on_progress: None,
            cancel: CancellationToken::none(),
        }
    }

    pub fn options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn on_progress<F: FnMut(f64) + 'a>(mut self, f: F) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Converts every chunk in order.
    ///
    /// The first failing chunk aborts the job, as does cancellation observed
    /// before a chunk starts. Either way no partial output is returned.
    pub fn run(&mut self, text: &str) -> Result<String, ConversionError> {
        let chunks = split_chunks(text);
        let total = chunks.len();

        info!(
            "batch: {} chunks with {} ({})",
            total,
            self.scheme.display_name(),
            if self.options.reverse { "decode" } else { "encode" }
        );

        let mut output = String::with_capacity(text.len());

        for (index, chunk) in chunks.into_iter().enumerate() {
            if let Some(reason) = self.cancel.reason() {
                info!("batch: cancelled after {}/{} chunks ({})", index, total, reason);
                return Err(ConversionError::Cancelled {
                    reason: reason.to_string(),
                });
            }

            let converted = transform(self.scheme, chunk, &self.options).inspect_err(|e| {
                debug!("batch: chunk {} failed: {:?}", index, e);
            })?;
            output.push_str(&converted);
            output.push('\n');

            if let Some(report) = self.on_progress.as_mut() {
                report((index + 1) as f64 / total as f64);
            }
        }

        info!("batch: complete, {} bytes of output", output.len());
        Ok(output)
    }
}

/// Runs one scheme over newline-delimited `text`, calling `on_progress`
/// after each chunk.
pub fn process_batch<F>(
    text: &str,
    scheme: Scheme,
    options: &ConversionOptions,
    on_progress: F,
) -> Result<String, ConversionError>
where
    F: FnMut(f64),
{
    BatchJob::new(scheme)
        .options(*options)
        .on_progress(on_progress)
        .run(text)
}

/// A batch job running on a worker thread.
///
/// Dropping the handle without joining cancels the job.
pub struct BatchHandle {
    progress: Receiver<f64>,
    source: CancellationSource,
    worker: Option<JoinHandle<Result<String, ConversionError>>>,
}

impl BatchHandle {
    /// Progress values in the order they were reported. The channel closes
    /// when the worker finishes.
    pub fn progress(&self) -> &Receiver<f64> {
        &self.progress
    }

    /// Stops the job before its next chunk.
    pub fn cancel(&self) {
        self.source.cancel(CancellationReason::UserCancel);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(|w| w.is_finished())
    }

    /// Waits for the worker and returns its result.
    pub fn join(mut self) -> Result<String, ConversionError> {
        match self.worker.take() {
            Some(worker) => worker
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
            None => Err(ConversionError::Cancelled {
                reason: CancellationReason::Shutdown.to_string(),
            }),
        }
    }
}

impl Drop for BatchHandle {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.source.cancel(CancellationReason::Shutdown);
        }
    }
}

/// Starts a batch job on its own thread.
pub fn spawn_batch(text: String, scheme: Scheme, options: ConversionOptions) -> BatchHandle {
    let (tx, rx) = channel::unbounded();
    let source = CancellationSource::new();
    let token = source.token();

    let worker = thread::spawn(move || {
        BatchJob::new(scheme)
            .options(options)
            .cancel_token(token)
            .on_progress(move |fraction| {
                // Receiver may be gone; the result is still collected via join
                let _ = tx.send(fraction);
            })
            .run(&text)
    });

    BatchHandle {
        progress: rx,
        source,
        worker: Some(worker),
    }
}

/// `<stem>_<Display Name>_<encoded|decoded>.txt` for a batch converted file.
pub fn output_file_name(original: &Path, scheme: Scheme, reverse: bool) -> String {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    format!(
        "{}_{}_{}.txt",
        stem,
        scheme.display_name(),
        if reverse { "decoded" } else { "encoded" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn collect_progress(
        text: &str,
        scheme: Scheme,
        options: &ConversionOptions,
    ) -> (Result<String, ConversionError>, Vec<f64>) {
        let mut seen = Vec::new();
        let result = process_batch(text, scheme, options, |p| seen.push(p));
        (result, seen)
    }

    #[test]
    fn test_split_chunks() {
        assert!(split_chunks("").is_empty());
        assert_eq!(split_chunks("a"), vec!["a"]);
        assert_eq!(split_chunks("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_chunks("\n"), vec!["", ""]);
    }

    #[test]
    fn test_each_chunk_followed_by_newline() {
        let (result, progress) =
            collect_progress("abc\nxyz", Scheme::Rot13, &ConversionOptions::new());
        assert_eq!(result.unwrap(), "nop\nklm\n");
        assert_eq!(progress, vec![0.5, 1.0]);
    }

    #[test]
    fn test_trailing_empty_chunk_preserved() {
        let (result, progress) =
            collect_progress("SOS\n", Scheme::Morse, &ConversionOptions::new());
        assert_eq!(result.unwrap(), "... --- ...\n\n");
        assert_eq!(progress.len(), 2);
    }

    #[test]
    fn test_empty_input_reports_nothing() {
        let (result, progress) = collect_progress("", Scheme::Morse, &ConversionOptions::new());
        assert_eq!(result.unwrap(), "");
        assert!(progress.is_empty());
    }

    #[test]
    fn test_progress_monotonic_and_complete() {
        let text = (0..37).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let (result, progress) = collect_progress(&text, Scheme::Binary, &ConversionOptions::new());

        assert!(result.is_ok());
        assert_eq!(progress.len(), 37);
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*progress.last().unwrap(), 1.0);
    }

    #[test]
    fn test_failure_aborts_batch() {
        let options = ConversionOptions::new().reversed();
        let (result, progress) = collect_progress("SGk=\n!!!\nSGk=", Scheme::Base64, &options);

        assert!(matches!(
            result,
            Err(ConversionError::MalformedEncodedInput { scheme: Scheme::Base64, .. })
        ));
        assert_eq!(progress, vec![1.0 / 3.0]);
    }

    #[test]
    fn test_unsupported_reverse_aborts_before_progress() {
        let options = ConversionOptions::new().reversed();
        let (result, progress) = collect_progress("a\nb", Scheme::Braille, &options);

        assert_eq!(
            result,
            Err(ConversionError::UnsupportedReverseConversion {
                scheme: Scheme::Braille
            })
        );
        assert!(progress.is_empty());
    }

    #[test]
    fn test_cancel_before_start() {
        let source = CancellationSource::new();
        source.cancel(CancellationReason::UserCancel);

        let mut calls = 0;
        let result = BatchJob::new(Scheme::Rot13)
            .cancel_token(source.token())
            .on_progress(|_| calls += 1)
            .run("a\nb\nc");

        assert_eq!(
            result,
            Err(ConversionError::Cancelled {
                reason: "user cancelled".to_string()
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_cancel_between_chunks() {
        let source = CancellationSource::new();
        let canceller = source.clone();
        let mut seen = Vec::new();

        let result = BatchJob::new(Scheme::Rot13)
            .cancel_token(source.token())
            .on_progress(|p| {
                seen.push(p);
                canceller.cancel(CancellationReason::UserCancel);
            })
            .run("a\nb\nc");

        assert!(matches!(result, Err(ConversionError::Cancelled { .. })));
        assert_eq!(seen, vec![1.0 / 3.0]);
    }

    #[test]
    fn test_spawned_batch() {
        let handle = spawn_batch(
            "abc\ndef".to_string(),
            Scheme::Caesar,
            ConversionOptions::new().with_caesar_shift(1),
        );

        let result = handle.progress().clone();
        let output = handle.join().unwrap();
        let progress: Vec<f64> = result.try_iter().collect();

        assert_eq!(output, "bcd\nefg\n");
        assert_eq!(progress, vec![0.5, 1.0]);
    }

    #[test]
    fn test_output_file_name() {
        let path = PathBuf::from("/tmp/notes.txt");
        assert_eq!(
            output_file_name(&path, Scheme::Morse, false),
            "notes_Morse Code_encoded.txt"
        );
        assert_eq!(
            output_file_name(Path::new("cipher"), Scheme::Caesar, true),
            "cipher_Caesar Cipher_decoded.txt"
        );
    }
}
