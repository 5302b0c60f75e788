//! The FileSender: prepares and delivers a batch of files.
//!
//! Files are processed one at a time in input order. A failure ends that
//! file's run and is recorded on its [`FileSendResult`]; the batch always
//! continues. Nothing is retried.

use file_sender_core::{
    prepare_to_send, Clock, Credential, Cryptographer, Document, FailureKind, FileContent,
    Outcome, Recognizer,
};
use file_sender_transport::Sender;

use crate::config::FileSenderConfig;
use crate::report::{FileSendResult, SendReport};

/// Prefix applied to transport failures.
pub const SEND_ERROR_PREFIX: &str = "Can't send. ";

/// Prepares files with the injected collaborators and sends them.
///
/// Generic over:
/// - `R` - parses raw content into documents
/// - `C` - signs document bodies
/// - `S` - delivers signed documents
/// - `K` - supplies the current time for freshness checks
pub struct FileSender<R, C, S, K> {
    recognizer: R,
    cryptographer: C,
    sender: S,
    clock: K,
    config: FileSenderConfig,
}

impl<R, C, S, K> FileSender<R, C, S, K>
where
    R: Recognizer,
    C: Cryptographer,
    S: Sender,
    K: Clock,
{
    /// Create a file sender with the default configuration.
    pub fn new(recognizer: R, cryptographer: C, sender: S, clock: K) -> Self {
        Self::with_config(
            recognizer,
            cryptographer,
            sender,
            clock,
            FileSenderConfig::default(),
        )
    }

    /// Create a file sender with an explicit configuration.
    pub fn with_config(
        recognizer: R,
        cryptographer: C,
        sender: S,
        clock: K,
        config: FileSenderConfig,
    ) -> Self {
        Self {
            recognizer,
            cryptographer,
            sender,
            clock,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &FileSenderConfig {
        &self.config
    }

    /// Get the transport.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Recognize, validate and sign `file` without sending it.
    pub fn prepare(&self, file: &FileContent, credential: &Credential) -> Outcome<Document> {
        prepare_to_send(
            file,
            credential,
            &self.recognizer,
            &self.cryptographer,
            &self.clock,
            &self.config.validation,
        )
    }

    /// Prepare and send one file.
    pub fn send_file(&self, file: &FileContent, credential: &Credential) -> FileSendResult {
        let outcome = self
            .prepare(file, credential)
            .then(|doc| self.deliver(doc));

        match &outcome {
            Outcome::Success(doc) => tracing::debug!(
                file = file.name(),
                digest = %doc.digest(),
                "file sent"
            ),
            Outcome::Failure(failure) => tracing::warn!(
                file = file.name(),
                kind = %failure.kind(),
                error = failure.message(),
                "file not sent"
            ),
        }

        FileSendResult::from_outcome(file.clone(), outcome)
    }

    /// Prepare and send every file, returning one result per file in input order.
    pub fn send_files(&self, files: &[FileContent], credential: &Credential) -> Vec<FileSendResult> {
        let results: Vec<_> = files
            .iter()
            .map(|file| self.send_file(file, credential))
            .collect();

        let report = SendReport::from_results(&results);
        tracing::info!(
            total = report.total,
            succeeded = report.succeeded,
            failed = report.failed,
            "batch processed"
        );

        results
    }

    /// Lazily prepare and send files as the iterator is advanced.
    ///
    /// Each call to `next` processes exactly one file.
    pub fn send_files_iter<'a, I>(
        &'a self,
        files: I,
        credential: &'a Credential,
    ) -> impl Iterator<Item = FileSendResult> + 'a
    where
        I: IntoIterator<Item = FileContent>,
        I::IntoIter: 'a,
    {
        files
            .into_iter()
            .map(move |file| self.send_file(&file, credential))
    }

    fn deliver(&self, doc: Document) -> Outcome<Document> {
        Outcome::of_kind(FailureKind::Transport, self.sender.send(&doc))
            .map(|()| doc)
            .refine_error(SEND_ERROR_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use file_sender_core::{
        Ed25519Cryptographer, FixedClock, RecognizeError, SignError, SignedEnvelope,
    };
    use file_sender_transport::MemorySender;

    /// Reads `format|unix-seconds|body` from the file content.
    struct PipeRecognizer;

    impl Recognizer for PipeRecognizer {
        fn recognize(&self, file: &FileContent) -> Result<Document, RecognizeError> {
            let text = std::str::from_utf8(file.content())
                .map_err(|_| RecognizeError::NotRecognized("not utf-8".into()))?;
            let mut parts = text.splitn(3, '|');
            let (Some(format), Some(secs), Some(body)) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(RecognizeError::NotRecognized("missing fields".into()));
            };
            let secs: i64 = secs
                .parse()
                .map_err(|_| RecognizeError::NotRecognized("bad timestamp".into()))?;
            let created = Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| RecognizeError::NotRecognized("bad timestamp".into()))?;
            Ok(Document::new(file.name(), body.as_bytes().to_vec(), created, format))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
    }

    fn file(name: &str, format: &str, created: DateTime<Utc>) -> FileContent {
        let text = format!("{format}|{}|hello from {name}", created.timestamp());
        FileContent::new(name, text.into_bytes())
    }

    fn credential() -> Credential {
        Credential::from_seed("acme", &[3; 32])
    }

    fn file_sender(
        sender: MemorySender,
    ) -> FileSender<PipeRecognizer, Ed25519Cryptographer, MemorySender, FixedClock> {
        FileSender::new(
            PipeRecognizer,
            Ed25519Cryptographer,
            sender,
            FixedClock::new(now()),
        )
    }

    #[test]
    fn test_send_valid_file() {
        let fs = file_sender(MemorySender::new());
        let input = file("a", "4.0", now());
        let result = fs.send_file(&input, &credential());

        assert!(result.is_success());
        assert_eq!(result.file(), &input);

        let delivered = fs.sender().delivered();
        assert_eq!(delivered.len(), 1);
        let envelope = SignedEnvelope::decode(delivered[0].content()).unwrap();
        assert_eq!(envelope.content.as_ref(), b"hello from a");
        envelope.verify().unwrap();
    }

    #[test]
    fn test_transport_failure_is_prefixed() {
        let fs = file_sender(MemorySender::offline("offline"));
        let result = fs.send_file(&file("a", "3.1", now()), &credential());

        assert_eq!(result.error(), Some("Can't send. offline"));
        assert_eq!(result.kind(), Some(FailureKind::Transport));
    }

    #[test]
    fn test_preparation_failure_never_reaches_transport() {
        let fs = file_sender(MemorySender::new());
        let result = fs.send_file(&file("a", "2.0", now()), &credential());

        assert_eq!(
            result.error(),
            Some("Can't prepare file to send. Invalid format version: 2.0")
        );
        assert_eq!(fs.sender().attempts(), 0);
    }

    #[test]
    fn test_signing_failure_is_not_treated_as_transport() {
        struct Broken;
        impl Cryptographer for Broken {
            fn sign(&self, _: &[u8], _: &Credential) -> Result<Vec<u8>, SignError> {
                Err(SignError::CannotSign("no key".into()))
            }
        }

        let fs = FileSender::new(
            PipeRecognizer,
            Broken,
            MemorySender::new(),
            FixedClock::new(now()),
        );
        let result = fs.send_file(&file("a", "4.0", now()), &credential());

        assert_eq!(result.error(), Some("Can't prepare file to send. no key"));
        assert_eq!(result.kind(), Some(FailureKind::Signing));
        assert_eq!(fs.sender().attempts(), 0);
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let fs = file_sender(MemorySender::new());
        fs.sender().reject("b");
        let files = vec![
            file("a", "4.0", now()),
            FileContent::new("garbage", b"???".to_vec()),
            file("b", "4.0", now()),
            file("c", "3.1", now()),
        ];

        let results = fs.send_files(&files, &credential());

        assert_eq!(results.len(), files.len());
        for (result, input) in results.iter().zip(&files) {
            assert_eq!(result.file(), input);
        }
        assert!(results[0].is_success());
        assert_eq!(
            results[1].error(),
            Some("Can't prepare file to send. missing fields")
        );
        assert_eq!(results[2].error(), Some("Can't send. rejected: b"));
        assert!(results[3].is_success());
    }

    #[test]
    fn test_iter_is_lazy() {
        let fs = file_sender(MemorySender::new());
        let credential = credential();
        let files = vec![file("a", "4.0", now()), file("b", "4.0", now())];

        let mut iter = fs.send_files_iter(files, &credential);
        assert_eq!(fs.sender().attempts(), 0);

        assert!(iter.next().unwrap().is_success());
        assert_eq!(fs.sender().attempts(), 1);

        assert!(iter.next().unwrap().is_success());
        assert!(iter.next().is_none());
        assert_eq!(fs.sender().attempts(), 2);
    }

    #[test]
    fn test_custom_config_applies() {
        let config = FileSenderConfig::from_json(r#"{"accepted_formats": ["5.0"]}"#).unwrap();
        let fs = FileSender::with_config(
            PipeRecognizer,
            Ed25519Cryptographer,
            MemorySender::new(),
            FixedClock::new(now()),
            config,
        );

        assert!(fs.send_file(&file("a", "5.0", now()), &credential()).is_success());
        assert_eq!(
            fs.send_file(&file("b", "4.0", now()), &credential()).error(),
            Some("Can't prepare file to send. Invalid format version: 4.0")
        );
    }
}
