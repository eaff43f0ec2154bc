use insta::assert_yaml_snapshot;

use crate::{BufferOptions, ScalarBuffer};

#[test]
fn default_reserves_nothing() {
    assert_eq!(BufferOptions::default(), BufferOptions { capacity: 0 });
    assert!(ScalarBuffer::with_options(BufferOptions::default()).is_empty());
}

#[test]
fn options_serialize() {
    assert_yaml_snapshot!(BufferOptions { capacity: 64 }, @"capacity: 64");
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let options: BufferOptions = serde_yaml::from_str("{}").unwrap();
    assert_eq!(options, BufferOptions::default());

    let options: BufferOptions = serde_yaml::from_str("capacity: 16").unwrap();
    assert_eq!(options.capacity, 16);
}
