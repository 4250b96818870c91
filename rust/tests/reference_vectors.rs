use idgen::{
    NUMERIC, Seed, encode_canonical, encode_with_pad_truncate, fnv1a64, generate_nanoid,
    generate_proquint, group, interpret, regroup, select_word, strip_separators,
};

#[test]
fn canonical_reference_vectors() {
    let cases = [
        ("127.0.0.1", "lusab-babad"),
        ("63.84.220.193", "gutih-tugad"),
        ("0", "babab-babab"),
        ("4294967295", "zuzuz-zuzuz"),
    ];
    for (input, expected) in cases {
        let seed = interpret(input);
        assert!(seed.direct_encode, "{input}");
        assert_eq!(generate_proquint(0, Some(seed)), expected, "{input}");
    }

    assert_eq!(encode_canonical(4_294_967_296), "babab-babad-babab-babab");
    assert_eq!(
        encode_canonical(9_223_372_036_854_775_807),
        "luzuz-zuzuz-zuzuz-zuzuz"
    );
    assert_eq!(
        encode_canonical(18_446_744_073_709_551_615),
        "zuzuz-zuzuz-zuzuz-zuzuz"
    );
}

#[test]
fn pad_and_truncate_keep_low_order_bytes() {
    assert_eq!(encode_with_pad_truncate(2_130_706_433, 8), "babab-babab-lusab-babad");
    assert_eq!(encode_with_pad_truncate(2_130_706_433, 2), "babad");
    assert_eq!(
        generate_proquint(6, Some(Seed::direct(2_130_706_433))),
        "babab-lusab-babad"
    );
}

#[test]
fn seeded_numeric_nanoid_end_to_end() {
    let seed = interpret("42");
    let first = generate_nanoid(NUMERIC, 12, Some(seed.value), 0).unwrap();
    let second = generate_nanoid(NUMERIC, 12, Some(seed.value), 0).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 12);
    assert!(first.chars().all(|c| NUMERIC.contains(c)));
    assert_eq!(first, "318402585476");
}

#[test]
fn seeded_proquint_uses_little_endian_stream_bytes() {
    // bytes 0..6 of the first SplitMix64 word for seed 42
    assert_eq!(generate_proquint(6, Some(Seed::random(42))), "nijov-vosoz-fimuf");
    let short = generate_proquint(4, Some(Seed::random(42)));
    assert_eq!(short, "nijov-vosoz");
}

#[test]
fn distinct_seeds_give_distinct_output() {
    let seeds = ["alpha", "beta", "gamma", "-7", "4294967296"];
    let ids: Vec<String> = seeds
        .iter()
        .map(|s| generate_nanoid(NUMERIC, 16, Some(interpret(s).value), 0).unwrap())
        .collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn grouping_is_stable_after_strip() {
    for s in ["abcdefghij", "lusab-babad", "a-b-c-d-e-f"] {
        for k in 1..6 {
            assert_eq!(
                group(&strip_separators(&group(s, k)), k),
                group(&strip_separators(s), k)
            );
        }
    }
    assert_eq!(regroup("babab-lusab-babad", 3), "bab-abl-usa-bba-bad");
}

#[test]
fn word_selection_wraps_negative_seeds() {
    let list = ["apple", "berry", "elder", "peach", "plum"];
    for seed in -12i64..12 {
        let n = list.len() as i64;
        let positive = ((seed % n) + n) % n;
        assert_eq!(
            select_word(&seed.to_string(), &list),
            select_word(&positive.to_string(), &list)
        );
        assert!(list.contains(&select_word(&seed.to_string(), &list).as_str()));
    }
}

#[test]
fn fnv_hello_world() {
    assert_eq!(fnv1a64(b"hello world"), 0x779a_65e7_023c_d2e7);
}
