use trisort::core::KeyAccessor;
use trisort::prelude::*;

// Simulate an external struct (like from apache-arrow)
struct MockArrowArray {
    data: Vec<u8>,
    offsets: Vec<usize>,
}

impl MockArrowArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for s in strings {
            data.extend_from_slice(s.as_bytes());
            offsets.push(data.len());
        }
        Self { data, offsets }
    }

    fn value(&self, index: usize) -> &[u8] {
        &self.data[self.offsets[index]..self.offsets[index + 1]]
    }
}

// Implement KeyAccessor for the external struct.
// This proves the trait is implementable by "outside crates".
impl KeyAccessor for MockArrowArray {
    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn key_len(&self, index: usize) -> usize {
        self.offsets[index + 1] - self.offsets[index]
    }

    fn symbol_at(&self, index: usize, position: usize) -> Option<u8> {
        self.value(index).get(position).copied()
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mock = MockArrowArray::new(&["foo", "bar", "baz"]);
    let indices = trisort(&mock).unwrap();

    // sorted: bar (1), baz (2), foo (0)
    assert_eq!(indices, vec![1, 2, 0]);
}

#[test]
fn test_external_struct_terminated() {
    let mock = MockArrowArray::new(&["foobar", "foo", "", "fo"]);
    let indices = trisort_with(&mock, KeyLayout::Terminated).unwrap();

    assert_eq!(indices, vec![2, 3, 1, 0]);
}
