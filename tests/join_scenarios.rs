//! End-to-end joining scenarios exercised through both adaptor shapes.

use suture::{join_with, JoinWithExt};
use test_case::test_case;

#[test_case(
    vec![vec![1, 2], vec![3], vec![4, 5, 6]], vec![0],
    vec![1, 2, 0, 3, 0, 4, 5, 6];
    "separator between every pair"
)]
#[test_case(
    vec![vec![1, 2], vec![], vec![3]], vec![9, 9],
    vec![1, 2, 9, 9, 9, 9, 3];
    "empty inner keeps both separators"
)]
#[test_case(
    vec![], vec![1],
    vec![];
    "empty outer is empty"
)]
#[test_case(
    vec![vec![1]], vec![9, 9],
    vec![1];
    "singleton outer has no separator"
)]
#[test_case(
    vec![vec![1], vec![2]], vec![],
    vec![1, 2];
    "empty pattern concatenates"
)]
fn view_joins(outer: Vec<Vec<i32>>, pattern: Vec<i32>, expected: Vec<i32>) {
    let view = join_with(&outer, &pattern);
    let joined: Vec<i32> = view.iter().copied().collect();
    assert_eq!(joined, expected);
}

#[test_case(
    vec![vec![1, 2], vec![3], vec![4, 5, 6]], vec![0],
    vec![1, 2, 0, 3, 0, 4, 5, 6];
    "separator between every pair"
)]
#[test_case(
    vec![vec![1, 2], vec![], vec![3]], vec![9, 9],
    vec![1, 2, 9, 9, 9, 9, 3];
    "empty inner keeps both separators"
)]
#[test_case(
    vec![], vec![1],
    vec![];
    "empty outer is empty"
)]
#[test_case(
    vec![vec![1]], vec![9, 9],
    vec![1];
    "singleton outer has no separator"
)]
#[test_case(
    vec![vec![1], vec![2]], vec![],
    vec![1, 2];
    "empty pattern concatenates"
)]
fn stream_joins(outer: Vec<Vec<i32>>, pattern: Vec<i32>, expected: Vec<i32>) {
    let joined: Vec<i32> = outer.into_iter().join_with(pattern).collect();
    assert_eq!(joined, expected);
}

#[test]
fn separator_count_tracks_outer_boundaries_not_elements() {
    // Four outer sequences, two of them empty: exactly three separator
    // occurrences regardless of how many elements the inners hold.
    let outer: Vec<Vec<u8>> = vec![vec![], b"AC".to_vec(), vec![], b"G".to_vec()];
    let view = join_with(&outer, b"-".as_slice());
    let joined: Vec<u8> = view.iter().copied().collect();
    assert_eq!(joined, b"-AC--G");
    assert_eq!(joined.iter().filter(|&&b| b == b'-').count(), 3);
}

#[test]
fn view_and_stream_agree() {
    let outer: Vec<Vec<u8>> = vec![b"TTAG".to_vec(), vec![], b"C".to_vec(), b"GGA".to_vec()];
    let pattern = b"NN".to_vec();

    let via_view: Vec<u8> = join_with(&outer, &pattern).iter().copied().collect();
    let via_stream: Vec<u8> = outer.into_iter().join_with(pattern).collect();
    assert_eq!(via_view, via_stream);
}
