/// Tests for the public batch, cancellation and history API
///
/// Drives the library the way a front end would: convert, record, export.
use decoder::prelude::*;
use decoder::{
    BatchJob, CancellationReason, CancellationSource, ConversionError, HISTORY_CAPACITY,
    output_file_name,
};
use std::path::Path;
use std::sync::Arc;

#[test]
fn test_process_batch_reports_progress() {
    let mut progress = Vec::new();
    let output = process_batch(
        "SOS\nHELP\n",
        Scheme::Morse,
        &ConversionOptions::default(),
        |fraction| progress.push(fraction),
    )
    .unwrap();

    assert_eq!(output, "... --- ...\n.... . .-.. .--.\n\n");
    assert_eq!(progress.len(), 3);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*progress.last().unwrap(), 1.0);
}

#[test]
fn test_process_batch_empty_input() {
    let mut calls = 0;
    let output = process_batch("", Scheme::Base64, &ConversionOptions::default(), |_| {
        calls += 1
    })
    .unwrap();

    assert_eq!(output, "");
    assert_eq!(calls, 0);
}

#[test]
fn test_process_batch_first_error_aborts() {
    let mut progress = Vec::new();
    let result = process_batch(
        "SGk=\n@@@@\nSGk=",
        Scheme::Base64,
        &ConversionOptions::default().reversed(),
        |fraction| progress.push(fraction),
    );

    assert!(matches!(
        result,
        Err(ConversionError::MalformedEncodedInput {
            scheme: Scheme::Base64,
            ..
        })
    ));
    assert_eq!(progress.len(), 1);
}

#[test]
fn test_process_batch_unsupported_reverse() {
    let result = process_batch(
        "a\nb",
        Scheme::Braille,
        &ConversionOptions::default().reversed(),
        |_| {},
    );
    assert_eq!(
        result,
        Err(ConversionError::UnsupportedReverseConversion {
            scheme: Scheme::Braille
        })
    );
}

#[test]
fn test_cancelled_before_first_chunk() {
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
fn test_cancel_mid_batch() {
    let source = CancellationSource::new();
    let token = source.token();

    let mut seen = 0;
    let result = BatchJob::new(Scheme::Binary)
        .cancel_token(token)
        .on_progress(|_| {
            seen += 1;
            if seen == 2 {
                source.cancel(CancellationReason::Custom("enough".into()));
            }
        })
        .run("a\nb\nc\nd");

    assert!(matches!(result, Err(ConversionError::Cancelled { reason }) if reason == "enough"));
    assert_eq!(seen, 2);
}

#[test]
fn test_spawned_batch_streams_progress() {
    let text: String = (0..50).map(|n| format!("line {}\n", n)).collect();
    let handle = spawn_batch(text.clone(), Scheme::Url, ConversionOptions::default());

    let progress: Vec<f64> = handle.progress().iter().collect();
    let output = handle.join().unwrap();

    assert_eq!(progress.len(), 51);
    assert_eq!(*progress.last().unwrap(), 1.0);
    assert!(output.starts_with("line%200\nline%201\n"));
}

#[test]
fn test_output_file_name() {
    assert_eq!(
        output_file_name(Path::new("/tmp/notes.txt"), Scheme::Caesar, false),
        "notes_Caesar Cipher_encoded.txt"
    );
    assert_eq!(
        output_file_name(Path::new("report.md"), Scheme::Base64, true),
        "report_Base64_decoded.txt"
    );
}

#[test]
fn test_history_round_through_conversions() {
    let ledger = Arc::new(HistoryLedger::new());
    let options = ConversionOptions::default();

    for word in ["one", "two", "three"] {
        let output = encode(Scheme::Rot13, word, &options).unwrap();
        ledger.record(ConversionResult::new(word, output, Scheme::Rot13, false));
    }

    let latest = ledger.latest().unwrap();
    assert_eq!(latest.input, "three");
    assert_eq!(latest.output, "guerr");

    let report = ledger.export();
    assert!(report.starts_with("Format: ROT13\nInput: three\nOutput: guerr\nDate: "));
    assert_eq!(report.matches("----------------------").count(), 3);
}

#[test]
fn test_history_capacity_is_ten() {
    assert_eq!(HISTORY_CAPACITY, 10);

    let ledger = HistoryLedger::new();
    for n in 0..12 {
        ledger.record(ConversionResult::new(
            n.to_string(),
            n.to_string(),
            Scheme::Binary,
            false,
        ));
    }

    let inputs: Vec<String> = ledger.entries().into_iter().map(|e| e.input).collect();
    assert_eq!(inputs.first().map(String::as_str), Some("11"));
    assert_eq!(inputs.last().map(String::as_str), Some("2"));
    assert_eq!(inputs.len(), 10);
}

#[test]
fn test_transform_direction_follows_options() {
    let forward = ConversionOptions::default();
    let reverse = forward.reversed();

    assert_eq!(transform(Scheme::Html, "<b>", &forward).unwrap(), "&lt;b&gt;");
    assert_eq!(transform(Scheme::Html, "&lt;b&gt;", &reverse).unwrap(), "<b>");
}
