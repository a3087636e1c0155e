//! Full fixture sequences for representative configurations, checking
//! every payload field in order.

use sliding_dp::{generate_pairs, Children, ConfigError, WindowConfig, WindowPayload};

fn child(left: (i64, i64), right: (i64, i64)) -> Children {
    Children {
        left: Some(left),
        middle: None,
        right: Some(right),
    }
}

fn child3(left: (i64, i64), middle: (i64, i64), right: (i64, i64)) -> Children {
    Children {
        left: Some(left),
        middle: Some(middle),
        right: Some(right),
    }
}

fn payload(
    config: &WindowConfig,
    pair: (i64, i64),
    iteration: usize,
    children: Children,
) -> WindowPayload {
    let resolved = config.resolve().unwrap();
    let current_size = resolved.min_size + iteration as i64;
    WindowPayload {
        pair,
        iteration,
        current_size,
        step: current_size * resolved.direction,
        direction: resolved.direction,
        children,
        config: resolved,
    }
}

#[test]
fn forward_basic_case() {
    // 0-1 1-2 2-3 3-4
    // 0-2 1-3 2-4
    // 0-3 1-4
    // 0-4
    let config = WindowConfig::new(4).with_from(0).with_min_size(1).with_max_size(4);
    let none = Children::default();
    let expected = vec![
        payload(&config, (0, 1), 0, none),
        payload(&config, (1, 2), 0, none),
        payload(&config, (2, 3), 0, none),
        payload(&config, (3, 4), 0, none),
        payload(&config, (0, 2), 1, child((0, 1), (1, 2))),
        payload(&config, (1, 3), 1, child((1, 2), (2, 3))),
        payload(&config, (2, 4), 1, child((2, 3), (3, 4))),
        payload(&config, (0, 3), 2, child3((0, 2), (1, 2), (1, 3))),
        payload(&config, (1, 4), 2, child3((1, 3), (2, 3), (2, 4))),
        payload(&config, (0, 4), 3, child3((0, 3), (1, 3), (1, 4))),
    ];

    let actual: Vec<_> = generate_pairs(&config).unwrap().collect();
    assert_eq!(actual, expected);
}

#[test]
fn reverse_basic_case() {
    // 4-3 3-2 2-1 1-0
    // 4-2 3-1 2-0
    // 4-1 3-0
    // 4-0
    let config = WindowConfig::new(0).with_from(4).with_min_size(1).with_max_size(4);
    let none = Children::default();
    let expected = vec![
        payload(&config, (4, 3), 0, none),
        payload(&config, (3, 2), 0, none),
        payload(&config, (2, 1), 0, none),
        payload(&config, (1, 0), 0, none),
        payload(&config, (4, 2), 1, child((4, 3), (3, 2))),
        payload(&config, (3, 1), 1, child((3, 2), (2, 1))),
        payload(&config, (2, 0), 1, child((2, 1), (1, 0))),
        payload(&config, (4, 1), 2, child3((4, 2), (3, 2), (3, 1))),
        payload(&config, (3, 0), 2, child3((3, 1), (2, 1), (2, 0))),
        payload(&config, (4, 0), 3, child3((4, 1), (3, 1), (3, 0))),
    ];

    let actual: Vec<_> = generate_pairs(&config).unwrap().collect();
    assert_eq!(actual, expected);
}

#[test]
fn zero_size_base_case() {
    // 0-0 1-1 2-2 3-3
    // 0-1 1-2 2-3
    // 0-2 1-3
    // 0-3
    let config = WindowConfig::new(3).with_from(0).with_min_size(0).with_max_size(3);
    let none = Children::default();
    let expected = vec![
        payload(&config, (0, 0), 0, none),
        payload(&config, (1, 1), 0, none),
        payload(&config, (2, 2), 0, none),
        payload(&config, (3, 3), 0, none),
        payload(&config, (0, 1), 1, child((0, 0), (1, 1))),
        payload(&config, (1, 2), 1, child((1, 1), (2, 2))),
        payload(&config, (2, 3), 1, child((2, 2), (3, 3))),
        payload(&config, (0, 2), 2, child3((0, 1), (1, 1), (1, 2))),
        payload(&config, (1, 3), 2, child3((1, 2), (2, 2), (2, 3))),
        payload(&config, (0, 3), 3, child3((0, 2), (1, 2), (1, 3))),
    ];

    let mut seq = generate_pairs(&config).unwrap();
    for want in expected {
        assert_eq!(seq.next(), Some(want));
    }
    assert_eq!(seq.next(), None);
}

#[test]
fn equal_min_and_max_single_tier() {
    let config = WindowConfig::new(0).with_from(4).with_min_size(2).with_max_size(2);
    let actual: Vec<_> = generate_pairs(&config).unwrap().collect();

    assert_eq!(
        actual.iter().map(|p| p.pair).collect::<Vec<_>>(),
        vec![(4, 2), (3, 1), (2, 0)]
    );
    for p in &actual {
        assert_eq!(p.iteration, 0);
        assert_eq!(p.current_size, 2);
        assert_eq!(p.step, -2);
        assert_eq!(p.direction, -1);
        // Base tier of the run: no children, even though smaller windows
        // exist structurally.
        assert_eq!(p.children, Children::default());
    }
}

#[test]
fn single_window() {
    let config = WindowConfig::new(1).with_from(0).with_min_size(1).with_max_size(1);
    let actual: Vec<_> = generate_pairs(&config).unwrap().collect();
    assert_eq!(actual, vec![payload(&config, (0, 1), 0, Children::default())]);
}

#[test]
fn single_full_range_window() {
    let config = WindowConfig::new(4).with_from(0).with_min_size(4).with_max_size(4);
    let actual: Vec<_> = generate_pairs(&config).unwrap().collect();
    assert_eq!(actual, vec![payload(&config, (0, 4), 0, Children::default())]);
}

#[test]
fn empty_range_is_invalid() {
    let config = WindowConfig::new(0).with_from(0).with_min_size(1).with_max_size(1);
    assert_eq!(
        generate_pairs(&config).err(),
        Some(ConfigError::EmptyRange { from: 0, to: 0 })
    );
}
