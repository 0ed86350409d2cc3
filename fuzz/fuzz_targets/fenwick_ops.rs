#![no_main]
use fensum::fenwick::FenwickTree;
use fensum::implicit::NaivePrefixSums;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<i32>, Vec<(u8, i32)>)| {
    let (raw, ops) = data;
    let values: Vec<i64> = raw.into_iter().map(i64::from).collect();

    let mut tree = FenwickTree::from_values(&values);
    let mut naive = NaivePrefixSums::from_values(&values);

    for (idx, delta) in ops {
        let idx = idx as usize;
        let delta = i64::from(delta);
        assert_eq!(tree.update(idx, delta).is_ok(), naive.update(idx, delta));
    }

    for i in 0..=values.len() {
        assert_eq!(tree.point_value(i), naive.point_value(i));
        assert_eq!(tree.prefix_sum(i), naive.prefix_sum(i));
        if i > 0 {
            let end = (i * 7) % (values.len() + 1);
            assert_eq!(tree.range_sum(i, end), naive.range_sum(i, end));
        }
    }
});
