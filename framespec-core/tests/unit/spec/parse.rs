use super::*;

fn spec(s: &str) -> Vec<Frame> {
    resolve_frames(&FrameSource::from(s)).unwrap()
}

#[test]
fn single_number_spec() {
    assert_eq!(spec("3"), vec![3]);
}

#[test]
fn range_spec_is_inclusive() {
    assert_eq!(spec("1-3"), vec![1, 2, 3]);
}

#[test]
fn range_step_spec() {
    assert_eq!(spec("1-5x2"), vec![1, 3, 5]);
}

#[test]
fn backwards_token_is_swapped() {
    assert_eq!(spec("5-1"), vec![1, 2, 3, 4, 5]);
}

#[test]
fn step_does_not_have_to_reach_last() {
    assert_eq!(spec("20-50x4"), vec![20, 24, 28, 32, 36, 40, 44, 48]);
}

#[test]
fn negative_frames_are_allowed_in_specs() {
    assert_eq!(spec("-1-5x2"), vec![-1, 1, 3, 5]);
    assert_eq!(spec("-5--1x2"), vec![-5, -3, -1]);
    assert_eq!(spec("-1--5x2"), vec![-5, -3, -1]);
}

#[test]
fn mixed_separators_sort_and_dedup() {
    assert_eq!(
        spec("1-10, 8-20x2, 19, 17"),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 17, 18, 19, 20]
    );
    assert_eq!(spec("  4 2,,3  "), vec![2, 3, 4]);
}

#[test]
fn malformed_specs_are_rejected() {
    for bad in ["", "   ", "f", "1-10xf", "1-10x0", "1-10x-2", "1-", "1x2", ",1", "1,", "1-2-3"] {
        let err = resolve_frames(&FrameSource::from(bad)).unwrap_err();
        assert!(
            matches!(err, FrameError::MalformedSpec(_)),
            "{bad:?} gave {err}"
        );
        assert!(!is_valid_spec(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn overflowing_integers_are_malformed() {
    assert!(!is_valid_spec("99999999999999999999"));
}

#[test]
fn is_valid_spec_accepts_grammar() {
    assert!(is_valid_spec("1-10, 14, 20-50x4"));
    assert!(is_valid_spec("-3"));
    assert!(is_valid_spec("120, 5, 26-76,19-23x4,   1000-2000, 3,9"));
}

#[test]
fn positional_ranges() {
    let r = |start, end: Option<Frame>, step: Option<Frame>| {
        resolve_frames(&FrameSource::Range { start, end, step })
    };
    assert_eq!(r(1, None, None).unwrap(), vec![1]);
    assert_eq!(r(1, Some(5), None).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(r(1, Some(5), Some(2)).unwrap(), vec![1, 3, 5]);
    assert_eq!(r(5, Some(1), Some(2)).unwrap(), vec![1, 3, 5]);
}

#[test]
fn positional_step_must_be_positive() {
    let err = resolve_frames(&FrameSource::range(1, 10, -1)).unwrap_err();
    assert!(matches!(err, FrameError::InvalidRange(_)));
    let err = resolve_frames(&FrameSource::range(1, 10, 0)).unwrap_err();
    assert!(matches!(err, FrameError::InvalidRange(_)));
}

// Open question: a spec may name "-5--1" but a positional range starting below
// zero is rejected. Both behaviours are kept until the intent is confirmed.
#[test]
fn positional_negative_start_is_rejected_but_spec_is_not() {
    let err = resolve_frames(&FrameSource::range(-5, -1, 2)).unwrap_err();
    assert!(matches!(err, FrameError::InvalidRange(_)));
    let err = resolve_frames(&FrameSource::range(5, -1, 1)).unwrap_err();
    assert!(matches!(err, FrameError::InvalidRange(_)));
    assert!(resolve_frames(&FrameSource::from("-5--1x2")).is_ok());
}

#[test]
fn explicit_frames_are_sorted_and_deduplicated() {
    let got = resolve_frames(&FrameSource::Frames(vec![1, 2, 6, 4, 2, -3])).unwrap();
    assert_eq!(got, vec![-3, 1, 2, 4, 6]);
    assert!(
        resolve_frames(&FrameSource::Frames(vec![]))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn from_args_dispatches_on_count() {
    assert!(matches!(
        FrameSource::from_args::<&str>(&[]),
        Err(FrameError::EmptyInput(_))
    ));
    assert_eq!(
        FrameSource::from_args(&["1-10"]).unwrap(),
        FrameSource::Spec("1-10".to_string())
    );
    assert_eq!(
        FrameSource::from_args(&["1", "9", "2"]).unwrap(),
        FrameSource::range(1, 9, 2)
    );
    assert_eq!(
        FrameSource::from_args(&["3", "1"]).unwrap(),
        FrameSource::Range {
            start: 3,
            end: Some(1),
            step: None
        }
    );
    assert!(matches!(
        FrameSource::from_args(&["a", "1"]),
        Err(FrameError::MalformedSpec(_))
    ));
    assert!(FrameSource::from_args(&["1", "2", "3", "4"]).is_err());
}
