use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_span_try_from_range_success() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.start, 50);
    assert_eq!(span.end, 100);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));

    let msg = SpanError::EndTooLarge(0x2_0000_0000).to_string();
    assert!(msg.contains("end"));
    assert!(msg.contains("0x200000000"));
}

#[test]
fn test_span_empty() {
    let span = Span::new(4, 4);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_span_to_range_slices_source() {
    let source = "dim x";
    let span = Span::new(4, 5);
    assert_eq!(&source[span.to_range()], "x");
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}
