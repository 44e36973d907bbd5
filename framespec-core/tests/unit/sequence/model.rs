use super::*;

fn seq(spec: &str) -> Sequence {
    Sequence::create(spec).unwrap()
}

fn frames(s: &Sequence) -> Vec<Frame> {
    s.iter().collect()
}

#[test]
fn factory_classifies_progressions() {
    assert!(Sequence::from_range(1, 1, 1).unwrap().is_progression());
    assert!(Sequence::from_range(1, 10, 1).unwrap().is_progression());
    assert!(Sequence::from_range(1, 10, 2).unwrap().is_progression());
    assert!(seq("1").is_progression());
    assert!(seq("1-10x2").is_progression());
    assert!(!seq("1-10, 14, 20-50x4").is_progression());
    assert!(
        !Sequence::from_frames([1, 3, 4, 6, 8, 9])
            .unwrap()
            .is_progression()
    );
    assert!(
        Sequence::from_frames([1, 3, 5, 7, 9])
            .unwrap()
            .is_progression()
    );
    assert!(
        !Sequence::from_frames([1, 3, 5, 7, 9, 10])
            .unwrap()
            .is_progression()
    );
}

#[test]
fn factory_failures() {
    assert!(matches!(
        Sequence::from_range(1, 10, -1),
        Err(FrameError::InvalidRange(_))
    ));
    assert!(matches!(
        Sequence::create("f"),
        Err(FrameError::MalformedSpec(_))
    ));
    assert!(matches!(
        Sequence::create("1-10xf"),
        Err(FrameError::MalformedSpec(_))
    ));
    assert!(matches!(
        Sequence::from_frames(Vec::new()),
        Err(FrameError::EmptyInput(_))
    ));
}

#[test]
fn start_end_step_from_ints() {
    let s = Sequence::from_range(1, 5, 2).unwrap();
    assert_eq!((s.start(), s.end(), s.step()), (1, 5, Some(2)));
    assert_eq!(frames(&s), vec![1, 3, 5]);
    assert_eq!(s.to_string(), "1-5x2");

    let s = Sequence::create(FrameSource::Range {
        start: 1,
        end: None,
        step: None,
    })
    .unwrap();
    assert_eq!((s.start(), s.end(), s.step()), (1, 1, Some(1)));
}

#[test]
fn start_end_step_from_specs() {
    let s = seq("5-1");
    assert_eq!((s.start(), s.end(), s.step()), (1, 5, Some(1)));
    let s = seq("-1--5x2");
    assert_eq!((s.start(), s.end(), s.step()), (-5, -1, Some(2)));
    let s = seq("5");
    assert_eq!((s.start(), s.end(), s.step()), (5, 5, Some(1)));
    assert_eq!(seq("1,2,4").step(), None);
}

#[test]
fn to_string_compacts() {
    assert_eq!(Sequence::from_range(0, 10, 3).unwrap().to_string(), "0-9x3");
    assert_eq!(seq("1-10, 14, 20-48x4").to_string(), "1-10,14,20-48x4");
}

#[test]
fn mixed_spec_renormalizes_unreachable_last() {
    let s = seq("1-10, 14, 20-50x4");
    assert_eq!(s.len(), 19);
    assert_eq!(s.to_string(), "1-10,14,20-48x4");
}

#[test]
fn debug_is_the_constructor_call() {
    assert_eq!(
        format!("{:?}", Sequence::from_range(0, 10, 3).unwrap()),
        "Sequence::create(\"0-9x3\")"
    );
    assert_eq!(
        format!("{:?}", seq("1-10, 14, 20-48x4")),
        "Sequence::create(\"1-10,14,20-48x4\")"
    );
}

#[test]
fn to_custom_separators() {
    assert_eq!(Sequence::from_range(10, 10, 1).unwrap().to_custom(":", "%", ";"), "10");
    assert_eq!(Sequence::from_range(0, 10, 1).unwrap().to_custom(":", "%", ";"), "0:10");
    assert_eq!(Sequence::from_range(1, 9, 2).unwrap().to_custom(":", "%", ";"), "1:9%2");
    assert_eq!(
        seq("1-10, 14, 20-48x4").to_custom(":", "%", ";"),
        "1:10;14;20:48%4"
    );
    assert_eq!(
        seq("1-10, 14, 20-48x4").to_custom(":", "%", "; "),
        "1:10; 14; 20:48%4"
    );
    assert_eq!(seq("-5--1x2").to_custom(":", "%", ";"), "-5:-1%2");
}

#[test]
fn iteration_is_sorted_unique_and_restartable() {
    let s = seq("1-10, 8-20x2, 19, 17");
    let expected = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 17, 18, 19, 20];
    assert_eq!(frames(&s), expected);
    assert_eq!((&s).into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn chunk_size_defaults_and_clamps() {
    assert_eq!(seq("1-100").chunk_size(), 100);
    let s = Sequence::create_with("1-100", ChunkOptions::with_size(200)).unwrap();
    assert_eq!(s.chunk_size(), 100);
    let s = Sequence::create_with("1-100", ChunkOptions::with_size(50)).unwrap();
    assert_eq!(s.chunk_size(), 50);

    let mut s = seq("1-100");
    s.set_chunk_size(50);
    assert_eq!(s.chunk_size(), 50);
    s.set_chunk_size(0);
    assert_eq!(s.chunk_size(), 100);
}

#[test]
fn best_chunk_size_evens_out_chunks() {
    let mut s = seq("1-100");
    s.set_chunk_size(76);
    assert_eq!(s.best_chunk_size(), 50);
    s.set_chunk_size(37);
    assert_eq!(s.best_chunk_size(), 34);
    s.set_chunk_size(100);
    assert_eq!(s.best_chunk_size(), 100);
}

#[test]
fn intersection() {
    let s = seq("1-10");
    assert_eq!(frames(&s.intersection(5..15).unwrap()), (5..=10).collect::<Vec<_>>());
    assert!(s.intersection(25..35).is_none());
}

#[test]
fn intersection_keeps_chunk_settings() {
    let opts = ChunkOptions::with_size(4).strategy(ChunkStrategy::Cycle);
    let s = Sequence::create_with("1-20", opts).unwrap();
    let i = s.intersection(&seq("3-30")).unwrap();
    assert_eq!(i.chunk_size(), 4);
    assert_eq!(i.chunk_strategy(), ChunkStrategy::Cycle);
}

#[test]
fn union() {
    let s = seq("1-10");
    assert_eq!(frames(&s.union(5..15)), (1..15).collect::<Vec<_>>());
    assert_eq!(seq("1-10").union(&seq("5-15")), seq("1-15"));
    assert_eq!(seq("1-3").union([10, 20]).to_string(), "1-3,10-20x10");
}

#[test]
fn offset() {
    assert_eq!(frames(&seq("1-10").offset(5).unwrap()), (6..16).collect::<Vec<_>>());
    assert_eq!(frames(&seq("11-20").offset(-5).unwrap()), (6..16).collect::<Vec<_>>());
    assert_eq!(frames(&seq("1-10").offset(-3).unwrap()), (-2..8).collect::<Vec<_>>());

    let s = Sequence::create_with(
        "1-10",
        ChunkOptions::with_size(3).strategy(ChunkStrategy::Cycle),
    )
    .unwrap();
    let o = s.offset(5).unwrap();
    assert_eq!(o.chunk_size(), s.chunk_size());
    assert_eq!(o.chunk_strategy(), s.chunk_strategy());
    assert_eq!(o.offset(-5).unwrap(), s);
}

#[test]
fn offset_past_frame_bounds_fails() {
    let s = Sequence::from_frames([i64::MAX - 1, i64::MAX]).unwrap();
    let err = s.offset(5).unwrap_err();
    assert!(matches!(err, FrameError::InvalidRange(_)), "{err}");
    assert!(err.to_string().contains("overflows"), "{err}");

    let low = Sequence::from_frames([i64::MIN, i64::MIN + 1]).unwrap();
    assert!(matches!(low.offset(-1), Err(FrameError::InvalidRange(_))));

    let edge = s.offset(-(i64::MAX - 1)).unwrap();
    assert_eq!(edge.frames(), &[0, 1]);
    assert_eq!(edge.offset(i64::MAX - 1).unwrap(), s);
}

#[test]
fn extreme_frames_round_trip() {
    let s = seq("-9223372036854775808, 9223372036854775807");
    assert_eq!(s.len(), 2);
    assert!(!s.is_progression());
    assert_eq!(s.to_string(), "-9223372036854775808,9223372036854775807");
    assert_eq!(seq(&s.to_string()), s);

    let s = Sequence::from_frames([i64::MIN, 0, i64::MAX]).unwrap();
    assert_eq!(s.progressions().len(), 3);
    assert_eq!(seq(&s.to_string()), s);
}

#[test]
fn subsample_spreads_by_position() {
    let s = seq("1-10");
    let cases: [(usize, &[Frame]); 11] = [
        (1, &[6]),
        (2, &[3, 8]),
        (3, &[2, 6, 9]),
        (4, &[2, 4, 7, 9]),
        (5, &[2, 4, 6, 8, 10]),
        (6, &[1, 3, 5, 6, 8, 10]),
        (7, &[1, 3, 4, 6, 7, 8, 10]),
        (8, &[1, 2, 4, 5, 6, 7, 9, 10]),
        (9, &[1, 2, 3, 4, 6, 7, 8, 9, 10]),
        (10, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
        (11, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
    ];
    for (count, expected) in cases {
        assert_eq!(frames(&s.subsample(count)), expected, "count {count}");
    }
    assert_eq!(s.subsample(0).len(), 1);
}

#[test]
fn equality_ignores_construction_and_chunk_settings() {
    let a = seq("1-5");
    let b = Sequence::from_frames([5, 4, 3, 2, 1, 1]).unwrap();
    let c = Sequence::create_with("1-5", ChunkOptions::with_size(2)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, seq("1-6"));
}

#[test]
fn from_str_and_serde_use_the_compact_form() {
    let s: Sequence = "20-50x4, 1-10".parse().unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "\"1-10,20-48x4\"");
    let back: Sequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
    assert!(serde_json::from_str::<Sequence>("\"1-x\"").is_err());
}

#[test]
fn contains_uses_membership() {
    let s = seq("1-10x3");
    assert!(s.contains(4));
    assert!(!s.contains(5));
}
